pub mod model;
pub mod validation;

pub use model::{
    Caste, Choice, Disability, Education, Gender, Profile, DEFAULT_AGE, MAX_AGE, MIN_AGE,
};
