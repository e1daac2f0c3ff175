//! Site content and display switches.

pub struct Person {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub email: &'static str,
    /// IANA timezone used until the visitor picks one.
    pub location: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
    pub essential: bool,
}

pub struct DisplayConfig {
    pub location: bool,
    pub time: bool,
}

pub struct Home {
    pub title: &'static str,
    pub description: &'static str,
    pub headline: &'static str,
    pub subline: &'static str,
}

pub const BASE_URL: &str = "https://demo.magic-portfolio.com";

pub const PERSON: Person = Person {
    name: "Julia Levine",
    role: "Data & Intelligence",
    avatar: "/images/avatar.png",
    email: "julialevine77@gmail.com",
    location: "America/New_York",
};

pub const SOCIAL: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        link: "https://www.linkedin.com/in/julia-levine-62a9b2225/",
        essential: true,
    },
    SocialLink {
        name: "GitHub",
        icon: "github",
        link: "https://github.com/julialevine7",
        essential: true,
    },
    SocialLink {
        name: "Email",
        icon: "email",
        link: "mailto:julialevine77@gmail.com",
        essential: true,
    },
];

pub const DISPLAY: DisplayConfig = DisplayConfig {
    location: true,
    time: true,
};

pub const HOME: Home = Home {
    title: "Julia Levine — Data & Intelligence",
    description: "Data scientist by trade, builder and creative by habit.",
    headline: "Builds that make data make sense",
    subline: "Data scientist by trade, builder and creative by habit.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timezone::{TimezoneId, GLOBAL_TIMEZONE_CATALOG};

    #[test]
    fn test_default_location_is_known() {
        assert!(GLOBAL_TIMEZONE_CATALOG.contains(&TimezoneId::from(PERSON.location)));
    }

    #[test]
    fn test_email_link_matches_person() {
        let email = SOCIAL
            .iter()
            .find(|s| s.icon == "email")
            .expect("email link should be configured");
        assert_eq!(email.link, format!("mailto:{}", PERSON.email));
    }
}
