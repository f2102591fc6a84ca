use clap::{Args, Parser, Subcommand};

use crate::profile::{Caste, Disability, Education, Gender, Profile, DEFAULT_AGE, MAX_AGE, MIN_AGE};

#[derive(Parser)]
#[command(name = "schemefinder")]
#[command(about = "Find government schemes and scholarships tailored to your profile in India")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the profile form interactively (default)
    Form,
    /// Get recommendations for a profile given as flags
    Recommend(ProfileArgs),
    /// Print the prompt that would be sent, without contacting the model
    Prompt(ProfileArgs),
    /// Write a default config file
    Init,
    /// Show configuration
    Config,
    /// Run diagnostics
    Doctor,
    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Age in years
    #[arg(long, default_value_t = DEFAULT_AGE,
          value_parser = clap::value_parser!(u32).range((MIN_AGE as i64)..=(MAX_AGE as i64)))]
    pub age: u32,

    /// Male, Female, Other or "Prefer not to say"
    #[arg(long, default_value_t = Gender::default())]
    pub gender: Gender,

    /// 10th, 12th, Diploma, Undergraduate or Postgraduate
    #[arg(long, default_value_t = Education::default())]
    pub education: Education,

    /// Annual income in INR, e.g. 500000
    #[arg(long, default_value = "")]
    pub income: String,

    /// General, OBC, SC, ST or EWS
    #[arg(long, default_value_t = Caste::default())]
    pub caste: Caste,

    /// State of residence, e.g. Maharashtra
    #[arg(long, default_value = "")]
    pub state: String,

    /// No or Yes
    #[arg(long, default_value_t = Disability::default())]
    pub disability: Disability,

    /// Skills or interests, e.g. "Programming, Arts"
    #[arg(long, default_value = "")]
    pub skills: String,
}

impl From<&ProfileArgs> for Profile {
    fn from(args: &ProfileArgs) -> Self {
        Self {
            age: args.age,
            gender: args.gender,
            education: args.education,
            income: args.income.clone(),
            caste: args.caste,
            state: args.state.clone(),
            disability: args.disability,
            skills: args.skills.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("schemefinder").chain(args.iter().copied()))
    }

    fn profile_of(cli: Cli) -> Profile {
        match cli.command {
            Some(Commands::Recommend(args)) => Profile::from(&args),
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn recommend_defaults_match_empty_form() {
        let profile = profile_of(parse(&["recommend"]).unwrap());
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn parses_full_profile() {
        let profile = profile_of(
            parse(&[
                "recommend",
                "--age",
                "21",
                "--gender",
                "Female",
                "--education",
                "Undergraduate",
                "--income",
                "300000",
                "--caste",
                "OBC",
                "--state",
                "Maharashtra",
                "--disability",
                "No",
                "--skills",
                "Programming",
            ])
            .unwrap(),
        );

        assert_eq!(profile.age, 21);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.education, Education::Undergraduate);
        assert_eq!(profile.caste, Caste::Obc);
        assert_eq!(profile.state, "Maharashtra");
        assert_eq!(profile.skills, "Programming");
    }

    #[test]
    fn accepts_multi_word_labels() {
        let profile = profile_of(parse(&["recommend", "--gender", "Prefer not to say"]).unwrap());
        assert_eq!(profile.gender, Gender::PreferNotToSay);
    }

    #[test]
    fn rejects_out_of_range_age() {
        assert!(parse(&["recommend", "--age", "9"]).is_err());
        assert!(parse(&["recommend", "--age", "101"]).is_err());
        assert!(parse(&["recommend", "--age", "100"]).is_ok());
    }

    #[test]
    fn rejects_unknown_option() {
        assert!(parse(&["recommend", "--caste", "Other"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = parse(&["doctor", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Doctor)));
    }
}
