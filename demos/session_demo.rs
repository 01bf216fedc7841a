use folio_motion::{
    AnimationSession, HostSignals, IntersectionEvent, Motion, MotionConfig, MotionFrame,
    ScrollReveal,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = MotionConfig::from_json_str(include_str!("../tests/data/site_motion.json"))?;
    let signals = HostSignals::new();
    let session = AnimationSession::mount(
        &signals,
        Motion::Reveal(ScrollReveal::new(&config.reveal, 4)?),
        0.0,
    );

    signals.intersection.emit(&IntersectionEvent {
        at: 0.0,
        fraction: Some(0.6),
    });
    for t in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
        if let Some(MotionFrame::Reveal(children)) = session.frame(t) {
            let opacities: Vec<_> = children
                .iter()
                .map(|s| s.get(folio_motion::Property::Opacity).unwrap_or(1.0))
                .collect();
            println!("t={t:.1}: {opacities:.2?}");
        }
    }

    Ok(())
}
