use serde::{Deserialize, Serialize};

/// User entity - a persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Generated by the store, never changes
    pub id: i32,
    pub name: String,
    /// Unique across all users
    pub email: String,
}

/// DTO for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Query options accepted by `UserService::filter_users`
///
/// The options are not combined. Only the first one present, in field order
/// (`email`, `name`, `name_contains`, `email_domain`), is applied; see
/// [`UserFilter::criterion`]. An empty string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilter {
    /// Exact email match, yields at most one user
    pub email: Option<String>,
    /// Exact name match
    pub name: Option<String>,
    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
    /// Case-insensitive `@domain` substring of the email
    pub email_domain: Option<String>,
}

/// The single criterion a [`UserFilter`] resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    Email(String),
    Name(String),
    NameContains(String),
    EmailDomain(String),
    All,
}

impl UserFilter {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn name_containing(fragment: impl Into<String>) -> Self {
        Self {
            name_contains: Some(fragment.into()),
            ..Default::default()
        }
    }

    pub fn by_email_domain(domain: impl Into<String>) -> Self {
        Self {
            email_domain: Some(domain.into()),
            ..Default::default()
        }
    }

    /// Pick the one criterion that takes effect
    ///
    /// Precedence is fixed: email, then name, then name fragment, then email
    /// domain, otherwise everything. Lower-priority options are dropped.
    pub fn criterion(self) -> FilterCriterion {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        if let Some(email) = present(self.email) {
            FilterCriterion::Email(email)
        } else if let Some(name) = present(self.name) {
            FilterCriterion::Name(name)
        } else if let Some(fragment) = present(self.name_contains) {
            FilterCriterion::NameContains(fragment)
        } else if let Some(domain) = present(self.email_domain) {
            FilterCriterion::EmailDomain(domain)
        } else {
            FilterCriterion::All
        }
    }
}

impl From<UserFilter> for FilterCriterion {
    fn from(filter: UserFilter) -> Self {
        filter.criterion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_selects_all() {
        assert_eq!(UserFilter::default().criterion(), FilterCriterion::All);
    }

    #[test]
    fn test_email_wins_over_everything() {
        let filter = UserFilter {
            email: Some("john@example.com".to_string()),
            name: Some("Jane Doe".to_string()),
            name_contains: Some("doe".to_string()),
            email_domain: Some("company.com".to_string()),
        };

        assert_eq!(
            filter.criterion(),
            FilterCriterion::Email("john@example.com".to_string())
        );
    }

    #[test]
    fn test_precedence_chain() {
        let filter = UserFilter {
            email: None,
            name: Some("Jane Doe".to_string()),
            name_contains: Some("doe".to_string()),
            email_domain: Some("company.com".to_string()),
        };
        assert_eq!(filter.criterion(), FilterCriterion::Name("Jane Doe".to_string()));

        let filter = UserFilter {
            name_contains: Some("doe".to_string()),
            email_domain: Some("company.com".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.criterion(), FilterCriterion::NameContains("doe".to_string()));

        let filter = UserFilter::by_email_domain("company.com");
        assert_eq!(
            filter.criterion(),
            FilterCriterion::EmailDomain("company.com".to_string())
        );
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let filter = UserFilter {
            email: Some(String::new()),
            name: Some(String::new()),
            name_contains: Some("doe".to_string()),
            email_domain: None,
        };
        assert_eq!(filter.criterion(), FilterCriterion::NameContains("doe".to_string()));

        let filter = UserFilter {
            email_domain: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.criterion(), FilterCriterion::All);
    }

    #[test]
    fn test_filter_deserializes_camel_case_keys() {
        let filter: UserFilter =
            serde_json::from_str(r#"{"nameContains":"doe","emailDomain":"example.com"}"#).unwrap();

        assert_eq!(filter.name_contains.as_deref(), Some("doe"));
        assert_eq!(filter.email_domain.as_deref(), Some("example.com"));
        assert!(filter.email.is_none());
        assert_eq!(FilterCriterion::from(filter), FilterCriterion::NameContains("doe".to_string()));
    }

    #[test]
    fn test_filter_deserializes_empty_object() {
        let filter: UserFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, UserFilter::default());
    }
}
