use contracts::domain::a012_inquiry_form::aggregate::InquiryForm;
use contracts::domain::a012_inquiry_form::submission::{
    InquirySubmission, SubmissionStatus, SubmitInquiryDto, UpdateSubmissionStatusDto,
};

use crate::shared::api_utils::{delete, get_json, get_public, post_json, post_public, put_json, seg};

const FORMS: &str = "/api/inquiry-forms";
const SUBMISSIONS: &str = "/api/inquiry-submissions";

pub async fn fetch_forms() -> Result<Vec<InquiryForm>, String> {
    get_json(FORMS).await
}

pub async fn save_form(form: &InquiryForm) -> Result<InquiryForm, String> {
    if form.is_new() {
        post_json(FORMS, form).await
    } else {
        put_json(&format!("{}/{}", FORMS, seg(&form.id)), form).await
    }
}

pub async fn delete_form(id: &str) -> Result<(), String> {
    delete(&format!("{}/{}", FORMS, seg(id))).await
}

/// Public
pub async fn fetch_form_by_slug(slug: &str) -> Result<InquiryForm, String> {
    get_public(&format!("{}/by-slug/{}", FORMS, seg(slug))).await
}

/// Public
pub async fn submit(form_id: &str, dto: &SubmitInquiryDto) -> Result<serde_json::Value, String> {
    post_public(&format!("{}/{}/submissions", FORMS, seg(form_id)), dto).await
}

pub async fn fetch_submissions() -> Result<Vec<InquirySubmission>, String> {
    get_json(SUBMISSIONS).await
}

pub async fn update_submission_status(id: &str, status: SubmissionStatus) -> Result<InquirySubmission, String> {
    put_json(
        &format!("{}/{}/status", SUBMISSIONS, seg(id)),
        &UpdateSubmissionStatusDto { status },
    )
    .await
}
