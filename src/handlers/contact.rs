//! Contact form relay: one email per submission, no retry.

use crate::error::AppError;
use crate::extractors::FormBody;
use crate::model::ContactMessage;
use crate::response::{ok, ContactSent};
use crate::state::AppState;
use axum::extract::State;

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    FormBody(body): FormBody,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let msg = ContactMessage::from_submission(&body);
    if let Err(e) = state.mailer.send(msg.to_mail()).await {
        tracing::error!(error = %e, kind = ?e.kind, "contact email failed");
        return Err(AppError::Mail(e.kind));
    }
    tracing::debug!("contact email sent");
    Ok(ok(ContactSent {
        success: true,
        message: "Email sent successfully",
    }))
}
