//! Axum route handlers for fiche generation.
//!
//! JSON and PDF routes share one pipeline (`generate_fiche`): validate →
//! template lookup → prompt build → completion call. The PDF route adds
//! the markdown and wkhtmltopdf rendering steps on top of the shared result.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::generation::builder::build_prompt;
use crate::generation::templates;
use crate::models::job::{GenerationResult, JobRequest};
use crate::render::{markdown, pdf};
use crate::state::AppState;

/// GET /templates
///
/// Lists the built-in templates in registration order.
pub async fn handle_list_templates() -> Json<Value> {
    let available: Vec<Value> = templates::list()
        .iter()
        .map(|t| json!({ "name": t.name, "description": t.description }))
        .collect();

    Json(json!({
        "available_templates": available,
        "message": "Utilise le champ 'template' dans /generate"
    }))
}

/// POST /generate
///
/// Runs the shared pipeline and returns the generated fiche as JSON.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(job): Json<JobRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    let result = generate_fiche(&state, &job).await?;
    Ok(Json(result))
}

/// POST /generate-pdf
///
/// Runs the shared pipeline, renders the fiche to HTML and then to PDF,
/// and returns the bytes as a downloadable attachment.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(job): Json<JobRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = generate_fiche(&state, &job).await?;

    let html = markdown::render_document(&result.markdown, &result.title);
    let bytes = pdf::html_to_pdf(&state.config.wkhtmltopdf_path, &html)
        .await
        .map_err(|e| AppError::Render(e.to_string()))?;

    info!("Rendered fiche PDF for '{}' ({} bytes)", result.title, bytes.len());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    let disposition = format!(
        "attachment; filename=\"fiche_{}.pdf\"",
        attachment_name(&result.title)
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid filename header: {e}")))?,
    );

    Ok((headers, bytes))
}

/// The shared generation pipeline used by both POST routes.
///
/// Validation runs before any external call; an invalid request never
/// reaches the completion service.
async fn generate_fiche(state: &AppState, job: &JobRequest) -> Result<GenerationResult, AppError> {
    job.validate()?;

    // validate() guarantees the template exists.
    let template = templates::get(&job.template)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("validated template disappeared")))?;

    let prompt = build_prompt(job, template);

    info!(
        "Generating fiche: title='{}' template={} language={}",
        job.title, job.template, job.language
    );

    let generated = state
        .completion
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(GenerationResult {
        generated_at: Utc::now(),
        title: job.title.clone(),
        template: job.template.clone(),
        language: job.language.clone(),
        markdown: generated,
    })
}

/// Derives the attachment filename stem from the job title: spaces become
/// underscores, accented letters common in French titles fold to their
/// ASCII base (the header value must stay ASCII), and anything else unsafe
/// for a header value is dropped.
fn attachment_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            ' ' => name.push('_'),
            'à' | 'â' | 'ä' => name.push('a'),
            'é' | 'è' | 'ê' | 'ë' => name.push('e'),
            'î' | 'ï' => name.push('i'),
            'ô' | 'ö' => name.push('o'),
            'ù' | 'û' | 'ü' => name.push('u'),
            'ç' => name.push('c'),
            'œ' => name.push_str("oe"),
            'æ' => name.push_str("ae"),
            'À' | 'Â' | 'Ä' => name.push('A'),
            'É' | 'È' | 'Ê' | 'Ë' => name.push('E'),
            'Î' | 'Ï' => name.push('I'),
            'Ô' | 'Ö' => name.push('O'),
            'Ù' | 'Û' | 'Ü' => name.push('U'),
            'Ç' => name.push('C'),
            'Œ' => name.push_str("Oe"),
            'Æ' => name.push_str("Ae"),
            c if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') => name.push(c),
            _ => {}
        }
    }
    name
}
