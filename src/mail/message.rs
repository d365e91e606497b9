use crate::domain::EmailAddress;

/// A fully composed HTML email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: EmailAddress,
    pub to: Vec<EmailAddress>,
    pub subject: String,
    pub html_body: String,
}

impl OutgoingEmail {
    /// Recipients joined for log lines.
    pub fn recipients(&self) -> String {
        self.to
            .iter()
            .map(EmailAddress::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipients_joined() {
        let email = OutgoingEmail {
            from: EmailAddress::new("site@example.com").unwrap(),
            to: vec![
                EmailAddress::new("a@example.com").unwrap(),
                EmailAddress::new("b@example.com").unwrap(),
            ],
            subject: "Hi".to_string(),
            html_body: "<p>Hi</p>".to_string(),
        };
        assert_eq!(email.recipients(), "a@example.com, b@example.com");
    }
}
