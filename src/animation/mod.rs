pub(crate) mod ease;
pub(crate) mod proc;
pub(crate) mod spring;
pub(crate) mod stagger;
pub(crate) mod style;
pub(crate) mod transform;
pub(crate) mod variant;
