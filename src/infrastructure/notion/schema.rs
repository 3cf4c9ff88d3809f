//! Subset of the Notion page schema the to-do database uses: a `Title`
//! title property, a `Done` checkbox and a `Date` date.

use serde::Deserialize;

use crate::domain::todos::todo::Todo;

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<NotionPage>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NotionPage {
    pub id: String,
    pub properties: PageProperties,
}

#[derive(Debug, Deserialize)]
pub struct PageProperties {
    #[serde(rename = "Title")]
    pub title: TitleProperty,
    #[serde(rename = "Done")]
    pub done: CheckboxProperty,
    #[serde(rename = "Date")]
    pub date: DateProperty,
}

#[derive(Debug, Deserialize)]
pub struct TitleProperty {
    #[serde(default)]
    pub title: Vec<RichText>,
}

#[derive(Debug, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckboxProperty {
    #[serde(default)]
    pub checkbox: bool,
}

#[derive(Debug, Deserialize)]
pub struct DateProperty {
    #[serde(default)]
    pub date: Option<DateValue>,
}

#[derive(Debug, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
}

impl From<NotionPage> for Todo {
    fn from(page: NotionPage) -> Self {
        let PageProperties { title, done, date } = page.properties;
        Todo {
            id: page.id,
            title: title
                .title
                .into_iter()
                .next()
                .map(|t| t.plain_text)
                .unwrap_or_default(),
            done: done.checkbox,
            date: date.date.and_then(|d| d.start).unwrap_or_default(),
        }
    }
}
