use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct ParamsAnalyze {
    #[serde(default)]
    pub url: String,
    // Block until the analysis settles instead of answering 202 right away
    #[serde(default)]
    pub wait: bool,
}

#[derive(Deserialize, Debug, Default)]
pub struct ParamsReport {
    pub device: Option<String>,
}
