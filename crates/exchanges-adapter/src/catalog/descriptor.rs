/*
[INPUT]:  Static endpoint declarations and caller-supplied arguments
[OUTPUT]: Resolved relative paths with placeholders substituted
[POS]:    Catalog layer - endpoint descriptors and template substitution
[UPDATE]: When changing placeholder syntax or default handling
*/

use std::fmt;

use url::form_urlencoded;

use crate::http::{ExchangeError, Result};

/// HTTP verb used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.pad("GET"),
            HttpMethod::Post => f.pad("POST"),
        }
    }
}

/// Whether an endpoint needs signed credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Static declaration of one remote operation
///
/// `path` is relative to the versioned API root and uses `{}` for each
/// positional argument. `defaults` supplies values for trailing placeholders
/// the caller leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub method: HttpMethod,
    pub visibility: Visibility,
    pub defaults: &'static [&'static str],
}

impl EndpointDescriptor {
    pub const fn public(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            method: HttpMethod::Get,
            visibility: Visibility::Public,
            defaults: &[],
        }
    }

    pub const fn private(name: &'static str, path: &'static str, method: HttpMethod) -> Self {
        Self {
            name,
            path,
            method,
            visibility: Visibility::Private,
            defaults: &[],
        }
    }

    pub const fn with_defaults(mut self, defaults: &'static [&'static str]) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    /// Number of `{}` placeholders in the template
    pub fn placeholder_count(&self) -> Result<usize> {
        let mut count = 0;
        let mut chars = self.path.chars();
        while let Some(c) = chars.next() {
            match c {
                '{' => match chars.next() {
                    Some('}') => count += 1,
                    _ => {
                        return Err(ExchangeError::malformed(
                            self.name,
                            "placeholders must be empty `{}` pairs",
                        ));
                    }
                },
                '}' => {
                    return Err(ExchangeError::malformed(self.name, "unbalanced `}` in template"));
                }
                _ => {}
            }
        }
        Ok(count)
    }

    /// Substitute positional arguments (plus defaults) and append extra query pairs
    pub fn resolve(&self, positional: &[&str], query: &[(&str, &str)]) -> Result<ResolvedEndpoint> {
        let args = self.fill_defaults(positional)?;

        let mut path = String::with_capacity(self.path.len() + 16);
        let mut args = args.into_iter();
        let mut chars = self.path.chars();
        while let Some(c) = chars.next() {
            if c == '{' {
                // placeholder_count already validated the brace pairs
                chars.next();
                let value = args
                    .next()
                    .ok_or_else(|| ExchangeError::malformed(self.name, "unsatisfied placeholder"))?;
                path.extend(form_urlencoded::byte_serialize(value.as_bytes()));
            } else {
                path.push(c);
            }
        }

        append_query(&mut path, query.iter().copied());

        Ok(ResolvedEndpoint {
            name: self.name,
            path,
            method: self.method,
            visibility: self.visibility,
        })
    }

    fn fill_defaults<'a>(&self, positional: &[&'a str]) -> Result<Vec<&'a str>> {
        let expected = self.placeholder_count()?;
        if positional.len() > expected {
            return Err(ExchangeError::malformed(
                self.name,
                format!("expected at most {expected} arguments, got {}", positional.len()),
            ));
        }

        let missing = expected - positional.len();
        if missing > self.defaults.len() {
            return Err(ExchangeError::malformed(
                self.name,
                format!("{missing} placeholder(s) left without a value"),
            ));
        }

        let mut args = positional.to_vec();
        args.extend_from_slice(&self.defaults[self.defaults.len() - missing..]);
        Ok(args)
    }
}

/// Descriptor with every placeholder substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub name: &'static str,
    /// Relative path including any query string
    pub path: String,
    pub method: HttpMethod,
    pub visibility: Visibility,
}

impl ResolvedEndpoint {
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    /// Path without its query string
    pub fn path_only(&self) -> &str {
        self.path.split('?').next().unwrap_or_default()
    }
}

/// Append url-encoded pairs, starting a query string when there is none
pub fn append_query<K, V>(target: &mut String, pairs: impl IntoIterator<Item = (K, V)>)
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
        any = true;
    }
    if !any {
        return;
    }

    match target.find('?') {
        None => target.push('?'),
        Some(_) if target.ends_with('?') || target.ends_with('&') => {}
        Some(_) => target.push('&'),
    }
    target.push_str(&serializer.finish());
}
