use url::form_urlencoded;

use crate::links::ResultLink;
use crate::need::Need;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateParams {
    pub need: String,
}

impl GenerateParams {
    /// First `need` pair wins; repeats and unknown keys are ignored.
    pub fn from_query(raw: Option<&str>) -> Self {
        let need = raw
            .and_then(|q| {
                form_urlencoded::parse(q.as_bytes())
                    .find(|(key, _)| key == "need")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default();
        Self { need }
    }
}

#[derive(Debug)]
pub struct ResultsView {
    pub need: Need,
    pub links: Vec<ResultLink>,
}
