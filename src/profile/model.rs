use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_AGE: u32 = 10;
pub const MAX_AGE: u32 = 100;
pub const DEFAULT_AGE: u32 = 18;

/// A fixed list of options presented as a single-choice field.
pub trait Choice: Copy + PartialEq + 'static {
    /// Options in the order the form shows them.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn position(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

fn parse_choice<T: Choice>(input: &str, field: &str) -> Result<T, String> {
    let wanted = input.trim();
    T::ALL
        .iter()
        .copied()
        .find(|c| c.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            let options: Vec<&str> = T::ALL.iter().map(|c| c.label()).collect();
            format!(
                "invalid {field} '{input}' (expected one of: {})",
                options.join(", ")
            )
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

/// Highest education level. `Select` means the user has not picked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Education {
    #[default]
    Select,
    Tenth,
    Twelfth,
    Diploma,
    Undergraduate,
    Postgraduate,
}

impl Choice for Education {
    const ALL: &'static [Self] = &[
        Education::Select,
        Education::Tenth,
        Education::Twelfth,
        Education::Diploma,
        Education::Undergraduate,
        Education::Postgraduate,
    ];

    fn label(&self) -> &'static str {
        match self {
            Education::Select => "Select",
            Education::Tenth => "10th",
            Education::Twelfth => "12th",
            Education::Diploma => "Diploma",
            Education::Undergraduate => "Undergraduate",
            Education::Postgraduate => "Postgraduate",
        }
    }
}

/// Caste category. `Select` means the user has not picked one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Caste {
    #[default]
    Select,
    General,
    Obc,
    Sc,
    St,
    Ews,
}

impl Choice for Caste {
    const ALL: &'static [Self] = &[
        Caste::Select,
        Caste::General,
        Caste::Obc,
        Caste::Sc,
        Caste::St,
        Caste::Ews,
    ];

    fn label(&self) -> &'static str {
        match self {
            Caste::Select => "Select",
            Caste::General => "General",
            Caste::Obc => "OBC",
            Caste::Sc => "SC",
            Caste::St => "ST",
            Caste::Ews => "EWS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Disability {
    #[default]
    No,
    Yes,
}

impl Choice for Disability {
    const ALL: &'static [Self] = &[Disability::No, Disability::Yes];

    fn label(&self) -> &'static str {
        match self {
            Disability::No => "No",
            Disability::Yes => "Yes",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "gender")
    }
}

impl FromStr for Education {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "education level")
    }
}

impl FromStr for Caste {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "caste category")
    }
}

impl FromStr for Disability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "disability answer")
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Caste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Disability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the user tells us about themselves for one submission.
///
/// Built fresh for every submit and dropped once the outcome is shown.
/// Free-text fields are kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    pub education: Education,
    pub income: String,
    pub caste: Caste,
    pub state: String,
    pub disability: Disability,
    pub skills: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            gender: Gender::default(),
            education: Education::default(),
            income: String::new(),
            caste: Caste::default(),
            state: String::new(),
            disability: Disability::default(),
            skills: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("prefer not to say".parse::<Gender>(), Ok(Gender::PreferNotToSay));
        assert_eq!("obc".parse::<Caste>(), Ok(Caste::Obc));
        assert_eq!("10th".parse::<Education>(), Ok(Education::Tenth));
        assert_eq!(" Yes ".parse::<Disability>(), Ok(Disability::Yes));
    }

    #[test]
    fn unknown_label_lists_options() {
        let err = "PhD".parse::<Education>().unwrap_err();
        assert!(err.contains("PhD"));
        assert!(err.contains("Undergraduate"));
    }

    #[test]
    fn options_keep_form_order() {
        let labels: Vec<&str> = Caste::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Select", "General", "OBC", "SC", "ST", "EWS"]);
        assert_eq!(Education::Postgraduate.position(), 5);
    }

    #[test]
    fn default_profile_matches_empty_form() {
        let profile = Profile::default();
        assert_eq!(profile.age, 18);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.education, Education::Select);
        assert_eq!(profile.caste, Caste::Select);
        assert_eq!(profile.disability, Disability::No);
        assert!(profile.state.is_empty());
    }
}
