use anyhow::{anyhow, bail};
use edu_remind_domain::{Job, ReminderType, Student, PLACEHOLDER_STUDENT_NAME, TEMPLATE_PARAM_COUNT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

/// Maps a job (and a sample student) to the positional values of a campaign
/// template
#[async_trait::async_trait]
pub trait ITemplateParamsProvider: Send + Sync {
    async fn generate(
        &self,
        job: &Job,
        student: Option<&Student>,
        reminder_type: ReminderType,
    ) -> anyhow::Result<Vec<String>>;
}

/// Used when no AI provider is configured. Always fails so that callers
/// fall back to the plain job values.
pub struct UnavailableTemplateParamsProvider;

#[async_trait::async_trait]
impl ITemplateParamsProvider for UnavailableTemplateParamsProvider {
    async fn generate(
        &self,
        _job: &Job,
        _student: Option<&Student>,
        _reminder_type: ReminderType,
    ) -> anyhow::Result<Vec<String>> {
        Err(anyhow!("No template parameter provider is configured"))
    }
}

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiTemplateParamsProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiTemplateParamsProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

fn build_prompt(job: &Job, student: Option<&Student>, reminder_type: ReminderType) -> String {
    let student_name = student
        .map(|s| s.name.as_str())
        .unwrap_or(PLACEHOLDER_STUDENT_NAME);
    format!(
        "You map job data to the {count} variables of a WhatsApp Business template.\n\
         Student: {student}\n\
         Job: {title} at {company}\n\
         Deadline: {deadline}\n\
         Link: {link}\n\
         Context: {context}\n\
         Return a JSON array of exactly {count} strings:\n\
         {{{{1}}}}: the student's first name, {{{{2}}}}: the job title, {{{{3}}}}: the company name, \
         {{{{4}}}}: the deadline, {{{{5}}}}: the application URL.",
        count = TEMPLATE_PARAM_COUNT,
        student = student_name,
        title = job.title,
        company = job.company,
        deadline = job.deadline_text(),
        link = job.link,
        context = reminder_type.as_str(),
    )
}

/// Extracts the parameter array from the model answer
fn parse_params(response: GenerateContentResponse) -> anyhow::Result<Vec<String>> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| anyhow!("The model returned no candidates"))?;
    let params: Vec<String> = serde_json::from_str(text.trim())?;
    if params.len() != TEMPLATE_PARAM_COUNT {
        bail!(
            "Expected {} template parameters but the model returned {}",
            TEMPLATE_PARAM_COUNT,
            params.len()
        );
    }
    Ok(params)
}

#[async_trait::async_trait]
impl ITemplateParamsProvider for GeminiTemplateParamsProvider {
    async fn generate(
        &self,
        job: &Job,
        student: Option<&Student>,
        reminder_type: ReminderType,
    ) -> anyhow::Result<Vec<String>> {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(job, student, reminder_type) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "type": "ARRAY", "items": { "type": "STRING" } }
            }
        });
        let res = self
            .client
            .post(&format!(
                "{}/models/{}:generateContent",
                GEMINI_API_BASE_URL, self.model
            ))
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("[Network Error] Gemini API POST error. Error message: {:?}", e);
                anyhow::Error::new(e)
            })?
            .error_for_status()?;
        let response = res.json::<GenerateContentResponse>().await.map_err(|e| {
            error!(
                "[Unexpected Response] Gemini API POST error. Error message: {:?}",
                e
            );
            anyhow::Error::new(e)
        })?;
        parse_params(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .unwrap()
    }

    #[test]
    fn parses_model_answer() {
        let params =
            parse_params(response(r#"["Rahul", "SDE Intern", "Google", "Dec 15", "https://g.co"]"#))
                .unwrap();
        assert_eq!(params[0], "Rahul");
        assert_eq!(params[4], "https://g.co");
    }

    #[test]
    fn rejects_malformed_answers() {
        assert!(parse_params(response(r#"["only", "two"]"#)).is_err());
        assert!(parse_params(response("not json")).is_err());
        assert!(parse_params(GenerateContentResponse { candidates: vec![] }).is_err());
    }

    #[test]
    fn prompt_mentions_job_and_context() {
        let job = Job::new(
            "SDE Intern".into(),
            "Google".into(),
            None,
            "https://careers.google.com".into(),
            "".into(),
        );
        let prompt = build_prompt(&job, None, ReminderType::Deadline);
        assert!(prompt.contains("SDE Intern at Google"));
        assert!(prompt.contains(PLACEHOLDER_STUDENT_NAME));
        assert!(prompt.contains("DEADLINE"));
        assert!(prompt.contains("{{1}}"));
    }

    #[tokio::test]
    async fn unavailable_provider_always_fails() {
        let job = Job::new("T".into(), "C".into(), None, "".into(), "".into());
        assert!(UnavailableTemplateParamsProvider
            .generate(&job, None, ReminderType::NewJob)
            .await
            .is_err());
    }
}
