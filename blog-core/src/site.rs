use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::post::PostId;

/// The site's pages, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
    Blog { id: PostId },
}

impl FromStr for Page {
    type Err = DomainError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim_end_matches('/');
        let page = match trimmed {
            "" => Page::Home,
            "/login" => Page::Login,
            "/register" => Page::Register,
            "/dashboard" => Page::Dashboard,
            other => match other.strip_prefix("/blog/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Page::Blog {
                    id: PostId::from(id),
                },
                _ => return Err(DomainError::UnknownRoute(path.to_string())),
            },
        };
        Ok(page)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => write!(f, "/"),
            Page::Login => write!(f, "/login"),
            Page::Register => write!(f, "/register"),
            Page::Dashboard => write!(f, "/dashboard"),
            Page::Blog { id } => write!(f, "/blog/{id}"),
        }
    }
}
