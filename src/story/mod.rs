//! Page identities that translated values are bound to.
//!
//! Values keep a shared reference to the page they were measured on. Pages
//! compare by identity: two pages built from the same URL are still distinct.

use std::fmt;

use url::Url;
use uuid::Uuid;

#[derive(Debug)]
pub struct Page {
    id: Uuid,
    url: Url,
    name: Option<String>,
}

impl Page {
    pub fn new(url: Url, name: Option<String>) -> Self {
        Page {
            id: Uuid::new_v4(),
            url,
            name,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The page name when one was given, otherwise the URL.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.url.as_str())
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Page {}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo_url() -> Url {
        Url::parse("http://www.foo.com/").unwrap()
    }

    #[test]
    fn pages_compare_by_identity() {
        let a = Page::new(foo_url(), Some("foo".to_string()));
        let b = Page::new(foo_url(), Some("foo".to_string()));

        assert_eq!(a, a);
        assert_ne!(a, b);
    }

    #[test]
    fn display_name_falls_back_to_url() {
        let named = Page::new(foo_url(), Some("foo".to_string()));
        let unnamed = Page::new(foo_url(), None);

        assert_eq!(named.display_name(), "foo");
        assert_eq!(unnamed.display_name(), "http://www.foo.com/");
        assert_eq!(unnamed.to_string(), "http://www.foo.com/");
    }

    #[test]
    fn exposes_url_and_name() {
        let page = Page::new(foo_url(), Some("foo".to_string()));

        assert_eq!(page.url().as_str(), "http://www.foo.com/");
        assert_eq!(page.name(), Some("foo"));
    }
}
