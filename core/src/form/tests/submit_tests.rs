//! Unit tests for submission

use vc_shared::messages;

use crate::form::mock::MockVerificationClient;
use crate::form::{CodeEntryForm, SubmitOutcome};

fn pasted(code: &str) -> CodeEntryForm {
    let mut form = CodeEntryForm::new();
    assert!(form.paste(code));
    form
}

#[tokio::test]
async fn test_submit_success_resets_form() {
    let client = MockVerificationClient::accepting();
    let mut form = pasted("123456");

    let outcome = form.submit(&client).await;

    assert_eq!(outcome, Some(SubmitOutcome::Verified));
    assert_eq!(client.sent(), vec!["123456".to_string()]);
    assert_eq!(form.code(), "");
    assert!(form.cells().iter().all(|cell| cell.is_empty()));
    assert_eq!(form.cell_errors(), [false; 6]);
    assert_eq!(form.success(), Some("Verification successful!"));
    assert_eq!(form.error(), None);
    assert_eq!(form.focus(), 0);
    assert!(!form.is_pending());
}

#[tokio::test]
async fn test_submit_rejection_shows_generic_message() {
    let client = MockVerificationClient::rejecting(messages::CODE_ENDS_IN_SEVEN);
    let mut form = pasted("000007");

    let outcome = form.submit(&client).await;

    assert!(matches!(outcome, Some(SubmitOutcome::Rejected { .. })));
    assert_eq!(form.error(), Some("Verification failed."));
    assert_eq!(form.success(), None);
    // The code stays for the user to fix
    assert_eq!(form.code(), "000007");
}

#[tokio::test]
async fn test_submit_transport_failure() {
    let client = MockVerificationClient::unreachable();
    let mut form = pasted("123456");

    let outcome = form.submit(&client).await;

    assert!(matches!(outcome, Some(SubmitOutcome::TransportFailed { .. })));
    assert_eq!(form.error(), Some("Verification error."));
    assert_eq!(form.success(), None);
    assert_eq!(form.code(), "123456");
}

#[tokio::test]
async fn test_submit_incomplete_code_is_not_sent() {
    let client = MockVerificationClient::accepting();
    let mut form = pasted("123");

    let outcome = form.submit(&client).await;

    assert_eq!(outcome, None);
    assert!(client.sent().is_empty());
    assert_eq!(form.error(), Some("Please enter valid 6 digits."));
    assert_eq!(form.cell_errors(), [false, false, false, true, true, true]);
}

#[tokio::test]
async fn test_submit_non_numeric_cell_is_not_sent() {
    let client = MockVerificationClient::accepting();
    let mut form = pasted("123456");
    form.enter(2, "x");

    assert_eq!(form.submit(&client).await, None);
    assert!(client.sent().is_empty());
    assert_eq!(form.cell_errors(), [false, false, true, false, false, false]);
}

#[tokio::test]
async fn test_submit_clears_previous_messages() {
    let client = MockVerificationClient::accepting();
    let mut form = CodeEntryForm::new();
    form.paste("bad paste");
    assert!(form.paste("654321"));
    form.submit(&client).await;
    assert_eq!(form.success(), Some("Verification successful!"));

    // The form is empty again, so the next submit fails locally and
    // drops the earlier success message
    form.submit(&client).await;
    assert_eq!(form.success(), None);
    assert_eq!(form.error(), Some(messages::FORM_INVALID_CODE));
}

#[test]
fn test_begin_submit_blocks_second_submission() {
    let mut form = pasted("123456");

    let first = form.begin_submit();
    assert_eq!(first.as_ref().map(|c| c.as_str()), Some("123456"));
    assert!(form.is_pending());

    let snapshot = form.clone();
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form, snapshot);

    form.finish_submit(&SubmitOutcome::Verified);
    assert!(!form.is_pending());
    assert_eq!(form.code(), "");
}

#[test]
fn test_editing_while_pending_is_allowed() {
    let mut form = pasted("123456");
    form.begin_submit();
    form.backspace(5);
    assert_eq!(form.code(), "12345");

    form.finish_submit(&SubmitOutcome::Rejected { message: None });
    assert_eq!(form.error(), Some("Verification failed."));
    assert_eq!(form.code(), "12345");
}
