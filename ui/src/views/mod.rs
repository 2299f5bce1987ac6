mod landing;
pub use landing::{
    FeaturesSection, HeroClientsSection, LandingPage, TargetAndFaqSection, UniquenessSection,
};

mod pages;
pub use pages::{NotFound, PageKind, SectionPage};
