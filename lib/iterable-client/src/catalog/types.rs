use std::str::FromStr;

use serde_json::Value;

use crate::client::Error;

/// Template classification accepted by the `/api/templates` listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TemplateType {
    /// Base template.
    Base,
    /// Blast campaign template.
    Blast,
    /// Triggered campaign template.
    Triggered,
    /// Workflow template.
    Workflow,
}

impl TemplateType {
    /// The literal wire values the remote API accepts.
    pub const ALLOWED: &'static [&'static str] = &["Base", "Blast", "Triggered", "Workflow"];

    /// The wire spelling of this template type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Blast => "Blast",
            Self::Triggered => "Triggered",
            Self::Workflow => "Workflow",
        }
    }
}

impl FromStr for TemplateType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Base" => Ok(Self::Base),
            "Blast" => Ok(Self::Blast),
            "Triggered" => Ok(Self::Triggered),
            "Workflow" => Ok(Self::Workflow),
            other => Err(Error::InvalidEnumValue {
                name: "template_type",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl From<TemplateType> for Value {
    fn from(value: TemplateType) -> Self {
        Value::String(value.as_str().to_string())
    }
}

/// Delivery medium used by the messaging and template endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MessageMedium {
    /// Email messages.
    Email,
    /// Mobile push notifications.
    Push,
    /// In-app messages.
    InApp,
    /// SMS messages.
    #[display("SMS")]
    Sms,
}

impl MessageMedium {
    /// The literal wire values the remote API accepts.
    pub const ALLOWED: &'static [&'static str] = &["Email", "Push", "InApp", "SMS"];

    /// The wire spelling of this medium.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Push => "Push",
            Self::InApp => "InApp",
            Self::Sms => "SMS",
        }
    }
}

impl FromStr for MessageMedium {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Email" => Ok(Self::Email),
            "Push" => Ok(Self::Push),
            "InApp" => Ok(Self::InApp),
            "SMS" => Ok(Self::Sms),
            other => Err(Error::InvalidEnumValue {
                name: "message_medium",
                value: other.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl From<MessageMedium> for Value {
    fn from(value: MessageMedium) -> Self {
        Value::String(value.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Base", TemplateType::Base)]
    #[case("Blast", TemplateType::Blast)]
    #[case("Triggered", TemplateType::Triggered)]
    #[case("Workflow", TemplateType::Workflow)]
    fn should_parse_template_type(#[case] input: &str, #[case] expected: TemplateType) {
        assert_eq!(input.parse::<TemplateType>().unwrap(), expected);
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("Email", MessageMedium::Email)]
    #[case("Push", MessageMedium::Push)]
    #[case("InApp", MessageMedium::InApp)]
    #[case("SMS", MessageMedium::Sms)]
    fn should_parse_message_medium(#[case] input: &str, #[case] expected: MessageMedium) {
        assert_eq!(input.parse::<MessageMedium>().unwrap(), expected);
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("base")]
    #[case("Broadcast")]
    #[case("")]
    fn should_reject_unknown_template_type(#[case] input: &str) {
        let error = input.parse::<TemplateType>().unwrap_err();
        let Error::InvalidEnumValue { value, allowed, .. } = error else {
            panic!("expected an InvalidEnumValue, got {error}");
        };
        assert_eq!(value, input);
        assert_eq!(allowed, TemplateType::ALLOWED);
    }

    #[test]
    fn display_matches_the_wire_spelling() {
        assert_eq!(MessageMedium::Sms.to_string(), "SMS");
        assert_eq!(MessageMedium::InApp.to_string(), "InApp");
        assert_eq!(TemplateType::Blast.to_string(), "Blast");
    }
}
