use nutype::nutype;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: Option<ContactMessageSubject>,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageAuthorEmail,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

/// Email address as entered by the author. The format is not checked.
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorEmail(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_rejected() {
        assert!(ContactMessageAuthorName::try_new("").is_err());
        assert!(ContactMessageAuthorEmail::try_new("").is_err());
        assert!(ContactMessageSubject::try_new("").is_err());
        assert!(ContactMessageContent::try_new("").is_err());
    }

    #[test]
    fn values_are_not_trimmed() {
        let name = ContactMessageAuthorName::try_new("  Ann ").unwrap();
        assert_eq!(&**name, "  Ann ");

        let email = ContactMessageAuthorEmail::try_new("not an email").unwrap();
        assert_eq!(&**email, "not an email");
    }
}
