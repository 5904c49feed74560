use relay_models::contact::{ContactMessage, ContactMessageAuthor};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Missing and `null` fields count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactMessage {
    /// Full name of the author
    pub name: Option<String>,
    /// Email address of the author
    pub email: Option<String>,
    /// Subject of the message
    pub subject: Option<String>,
    /// Content of the message
    pub message: Option<String>,
}

impl ApiContactMessage {
    /// Parse a request body. The body must be a JSON object or `null`, which
    /// is treated like an empty object.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Option<Map<String, Value>>>(body)? {
            Some(fields) => Self::deserialize(Value::Object(fields)),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingRequiredFields;

impl TryFrom<ApiContactMessage> for ContactMessage {
    type Error = MissingRequiredFields;

    fn try_from(value: ApiContactMessage) -> Result<Self, Self::Error> {
        let name = required(value.name);
        let email = required(value.email);
        let content = required(value.message);
        let (Some(name), Some(email), Some(content)) = (name, email, content) else {
            return Err(MissingRequiredFields);
        };

        Ok(Self {
            author: ContactMessageAuthor { name, email },
            subject: value.subject.and_then(|x| x.try_into().ok()),
            content,
        })
    }
}

fn required<T: TryFrom<String>>(value: Option<String>) -> Option<T> {
    value.unwrap_or_default().try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ContactMessage, MissingRequiredFields> {
        ApiContactMessage::from_json(json.as_bytes())
            .unwrap()
            .try_into()
    }

    #[test]
    fn complete() {
        let message = parse(
            r#"{"name":"Ann","email":"a@x.com","subject":"Hello","message":"Hi","extra":1}"#,
        )
        .unwrap();
        assert_eq!(&**message.author.name, "Ann");
        assert_eq!(&**message.author.email, "a@x.com");
        assert_eq!(message.subject.as_deref().map(String::as_str), Some("Hello"));
        assert_eq!(&**message.content, "Hi");
    }

    #[test]
    fn empty_subject_is_absent() {
        let message = parse(r#"{"name":"Ann","email":"a@x.com","subject":"","message":"Hi"}"#);
        assert_eq!(message.unwrap().subject, None);

        let message = parse(r#"{"name":"Ann","email":"a@x.com","subject":null,"message":"Hi"}"#);
        assert_eq!(message.unwrap().subject, None);
    }

    #[test]
    fn missing_required_fields() {
        for json in [
            r#"{"email":"a@x.com","message":"Hi"}"#,
            r#"{"name":"","email":"a@x.com","message":"Hi"}"#,
            r#"{"name":"Ann","message":"Hi"}"#,
            r#"{"name":"Ann","email":null,"message":"Hi"}"#,
            r#"{"name":"Ann","email":"a@x.com","message":""}"#,
            r#"{"name":"Ann","email":"a@x.com","subject":"Hello"}"#,
            r#"{}"#,
            r#"null"#,
        ] {
            assert_eq!(parse(json), Err(MissingRequiredFields), "{json}");
        }
    }

    #[test]
    fn invalid_types() {
        for json in [
            r#"{"name":1,"email":"a@x.com","message":"Hi"}"#,
            r#"["Ann","a@x.com","Hi"]"#,
            r#""Ann""#,
            r#"{"name":"Ann","email":"a@x.com","message":"Hi""#,
            "",
        ] {
            assert!(ApiContactMessage::from_json(json.as_bytes()).is_err(), "{json}");
        }
    }
}
