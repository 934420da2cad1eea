use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A book price.
///
/// Always a finite, non-negative number. Older catalogs stored prices as
/// strings (`"12.50"`), so deserialization accepts both forms; serialization
/// always writes a JSON number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(BookshelfError::Validation(format!(
                "price must be a non-negative number, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(BookshelfError::Validation("price cannot be empty".into()));
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            BookshelfError::Validation(format!("price '{}' is not a number", trimmed))
        })?;
        Price::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parsed = match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(n) => Price::new(n),
            RawPrice::Text(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// One catalog entry. Field names match the on-disk keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: Price,
    // The key is always written; "" means no image.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub image_url: Option<String>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(non_empty(raw))
}

fn none_as_empty<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl Book {
    /// Overwrites every field set in `patch`. Returns the names of the fields
    /// whose value actually changed.
    pub fn apply(&mut self, patch: &BookPatch) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if let Some(title) = &patch.title {
            if &self.title != title {
                self.title = title.clone();
                changed.push("title");
            }
        }
        if let Some(author) = &patch.author {
            if &self.author != author {
                self.author = author.clone();
                changed.push("author");
            }
        }
        if let Some(price) = patch.price {
            if self.price != price {
                self.price = price;
                changed.push("price");
            }
        }
        if let Some(image_url) = &patch.image_url {
            if self.image_url.as_ref() != Some(image_url) {
                self.image_url = Some(image_url.clone());
                changed.push("image_url");
            }
        }

        changed
    }
}

/// Unvalidated input for a new book.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
}

impl BookDraft {
    /// Checks the required fields and builds the book. Every missing field is
    /// reported in a single error.
    pub fn into_book(self) -> Result<Book> {
        let id = non_empty(self.id);
        let title = non_empty(self.title);
        let author = non_empty(self.author);

        let mut missing = Vec::new();
        if id.is_none() {
            missing.push("id");
        }
        if title.is_none() {
            missing.push("title");
        }
        if author.is_none() {
            missing.push("author");
        }
        if self.price.is_none() {
            missing.push("price");
        }

        match (id, title, author, self.price) {
            (Some(id), Some(title), Some(author), Some(price)) => Ok(Book {
                id,
                title,
                author,
                price,
                image_url: non_empty(self.image_url),
            }),
            _ => Err(BookshelfError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Partial update. `None` and empty strings leave the field untouched.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<Price>,
    pub image_url: Option<String>,
}

impl BookPatch {
    pub fn new(
        title: Option<String>,
        author: Option<String>,
        price: Option<Price>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            title: non_empty(title),
            author: non_empty(author),
            price,
            image_url: non_empty(image_url),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
    }
}
