use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::profile::{Choice, Profile, MAX_AGE, MIN_AGE};

/// Terminal rendition of the profile form.
pub struct ProfileForm {
    theme: ColorfulTheme,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Walks through every field, starting each one at `previous`.
    pub fn fill(&self, previous: &Profile) -> Result<Profile> {
        let age = Input::<u32>::with_theme(&self.theme)
            .with_prompt("Age")
            .default(previous.age)
            .validate_with(|age: &u32| -> Result<(), String> {
                if (MIN_AGE..=MAX_AGE).contains(age) {
                    Ok(())
                } else {
                    Err(format!("Age must be between {MIN_AGE} and {MAX_AGE}"))
                }
            })
            .interact_text()?;

        let gender = self.choose("Gender", previous.gender)?;
        let education = self.choose("Education Level", previous.education)?;
        let income = self.text("Annual Income (INR)", "e.g., 500000", &previous.income)?;
        let caste = self.choose("Caste Category", previous.caste)?;
        let state = self.text("State of Residence", "e.g., Maharashtra", &previous.state)?;
        let disability = self.choose("Do you have any disability?", previous.disability)?;
        let skills = self.text(
            "Your Skills/Interests",
            "e.g., Programming, Arts",
            &previous.skills,
        )?;

        Ok(Profile {
            age,
            gender,
            education,
            income,
            caste,
            state,
            disability,
            skills,
        })
    }

    pub fn confirm_submit(&self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Find Suitable Schemes?")
            .default(true)
            .interact()?)
    }

    pub fn confirm_again(&self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Edit your details and search again?")
            .default(false)
            .interact()?)
    }

    fn choose<T: Choice>(&self, prompt: &str, current: T) -> Result<T> {
        let labels: Vec<&str> = T::ALL.iter().map(|c| c.label()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(current.position())
            .interact()?;

        Ok(T::ALL[index])
    }

    fn text(&self, prompt: &str, placeholder: &str, current: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("{prompt} ({placeholder})"))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?)
    }
}
