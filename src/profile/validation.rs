use log::debug;

use crate::error::{Result, SchemeError};
use crate::profile::{Caste, Education, Profile};

impl Profile {
    /// Names of required fields that are still unset.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.education == Education::Select {
            missing.push("education");
        }
        if self.caste == Caste::Select {
            missing.push("caste");
        }
        // Only an empty entry counts as missing; input is not trimmed
        if self.state.is_empty() {
            missing.push("state");
        }

        missing
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }

        debug!("Profile rejected, missing: {}", missing.join(", "));
        Err(SchemeError::validation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::REQUIRED_FIELDS_WARNING;

    fn complete() -> Profile {
        Profile {
            education: Education::Diploma,
            caste: Caste::Sc,
            state: "Kerala".to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn complete_profile_passes() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let profile = complete();
        assert!(profile.income.is_empty() && profile.skills.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        let cases = [
            Profile {
                education: Education::Select,
                ..complete()
            },
            Profile {
                caste: Caste::Select,
                ..complete()
            },
            Profile {
                state: String::new(),
                ..complete()
            },
        ];

        for profile in cases {
            match profile.validate() {
                Err(SchemeError::Validation(msg)) => assert_eq!(msg, REQUIRED_FIELDS_WARNING),
                other => panic!("expected validation failure, got {other:?}"),
            }
        }
    }

    #[test]
    fn reports_every_missing_field() {
        assert_eq!(
            Profile::default().missing_fields(),
            vec!["education", "caste", "state"]
        );
    }

    #[test]
    fn whitespace_state_is_accepted_verbatim() {
        let profile = Profile {
            state: " ".to_string(),
            ..complete()
        };
        assert!(profile.validate().is_ok());
    }
}
