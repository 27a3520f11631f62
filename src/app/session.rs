use tracing::{debug, info, warn};

use crate::{
    domain::GiftCard,
    form::{
        FieldErrorMap, FieldValue, FormCommand, FormError, FormField, FormSnapshot, FormState,
        GiftCardFormData, apply_command,
    },
};

use super::{
    error::{SessionError, SubmitError},
    gateway::{MutationGateway, MutationResponse, TransportError},
    notify::{Notifier, notification_for},
    options::SessionOptions,
    outcome::{SubmitOutcome, classify},
    payload::{GiftCardUpdateRequest, build_update_request},
};

/// What `begin_submit` decided to do.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    NoOp,
    Dispatch(GiftCardUpdateRequest),
}

#[derive(Debug, Clone)]
struct PendingSubmit {
    edits: u64,
    submitted: GiftCardFormData,
}

/// Edit flow for a single gift card.
///
/// Owns the baseline snapshot and the working form state. Consumers get the session by
/// reference; there is no shared global form.
#[derive(Debug, Clone)]
pub struct GiftCardUpdateSession {
    options: SessionOptions,
    card: Option<GiftCard>,
    snapshot: FormSnapshot,
    state: FormState,
    pending: Option<PendingSubmit>,
    form_errors: FieldErrorMap,
    edits: u64,
}

impl GiftCardUpdateSession {
    pub fn new(card: Option<GiftCard>, options: SessionOptions) -> Self {
        let snapshot = FormSnapshot::from_gift_card(card.as_ref(), &options.default_currency);
        let state = FormState::from_snapshot(&snapshot);
        Self {
            options,
            card,
            snapshot,
            state,
            pending: None,
            form_errors: FieldErrorMap::new(),
            edits: 0,
        }
    }

    pub fn card(&self) -> Option<&GiftCard> {
        self.card.as_ref()
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn has_changed(&self) -> bool {
        self.state.has_changed()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Errors of the last rejected submit, keyed by the input they belong to.
    pub fn form_errors(&self) -> &FieldErrorMap {
        &self.form_errors
    }

    /// Applies a form command.
    ///
    /// `Reinitialize` replaces the baseline snapshot together with the form values, exactly
    /// like a reload, and is rejected while a submit is pending.
    pub fn dispatch(&mut self, command: FormCommand) -> Result<(), SessionError> {
        match command {
            FormCommand::Change { field, value } => self.change(field, value)?,
            FormCommand::MarkClean => self.mark_clean(),
            FormCommand::Reinitialize(snapshot) => self.reinitialize(snapshot)?,
        }
        Ok(())
    }

    /// Edits a field. Allowed while a submit is pending; the edit goes out with the next one.
    pub fn change(&mut self, field: FormField, value: FieldValue) -> Result<(), FormError> {
        self.state = apply_command(&self.state, FormCommand::change(field, value))?;
        self.edits += 1;
        Ok(())
    }

    pub fn mark_clean(&mut self) {
        self.state = self.state.cleaned();
    }

    /// Replaces the gift card after a reload. Unsaved edits are discarded.
    pub fn reload(&mut self, card: Option<GiftCard>) -> Result<(), SubmitError> {
        let snapshot = FormSnapshot::from_gift_card(card.as_ref(), &self.options.default_currency);
        self.reinitialize(snapshot)?;
        self.card = card;
        Ok(())
    }

    fn reinitialize(&mut self, snapshot: FormSnapshot) -> Result<(), SubmitError> {
        if self.pending.is_some() {
            warn!("reinitialize rejected while a submit is pending");
            return Err(SubmitError::InFlight);
        }
        if self.state.has_changed() {
            debug!("reinitialize discards unsaved edits");
        }
        self.state = FormState::from_snapshot(&snapshot);
        self.snapshot = snapshot;
        self.form_errors.clear();
        Ok(())
    }

    /// First half of a submit: builds the request and marks the session as submitting.
    pub fn begin_submit(&mut self) -> Result<SubmitPlan, SubmitError> {
        if self.pending.is_some() {
            warn!("submit rejected, previous submit still pending");
            return Err(SubmitError::InFlight);
        }
        if self.options.skip_unchanged_submit && !self.state.has_changed() {
            debug!("submit skipped, form unchanged");
            return Ok(SubmitPlan::NoOp);
        }
        let Some(card) = self.card.as_ref() else {
            warn!("submit rejected, no gift card loaded");
            return Err(SubmitError::NoEntity);
        };

        let request = build_update_request(&card.id, &self.snapshot, &self.state);
        debug!(
            id = %request.id,
            add_tags = request.input.add_tags.len(),
            remove_tags = request.input.remove_tags.len(),
            "dispatching gift card update"
        );
        self.pending = Some(PendingSubmit {
            edits: self.edits,
            submitted: self.state.data().clone(),
        });
        Ok(SubmitPlan::Dispatch(request))
    }

    /// Second half of a submit: classifies the mutation result and updates the session.
    pub fn complete_submit(
        &mut self,
        result: Result<MutationResponse, TransportError>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let pending = self.pending.take().ok_or(SubmitError::NotPending)?;
        let outcome = classify(&self.options.recognized_errors, result);

        match &outcome {
            SubmitOutcome::Success => {
                self.form_errors.clear();
                if self.options.rebase_on_success {
                    self.snapshot = FormSnapshot::new(pending.submitted);
                }
                if self.edits == pending.edits {
                    self.mark_clean();
                } else {
                    debug!("edits arrived during submit, form stays dirty");
                }
                info!("gift card updated");
            }
            SubmitOutcome::ValidationFailed {
                field_errors,
                errors,
                special_case,
            } => {
                self.form_errors = field_errors.clone();
                info!(
                    errors = errors.len(),
                    mapped = field_errors.len(),
                    special_case = ?special_case,
                    "gift card update rejected"
                );
            }
            SubmitOutcome::SubmissionFailed { message } => {
                self.form_errors.clear();
                warn!(%message, "gift card update failed");
            }
            SubmitOutcome::NoOp => {}
        }
        Ok(outcome)
    }

    /// Drops a pending submit whose response will never be delivered.
    pub fn cancel_submit(&mut self) {
        if self.pending.take().is_some() {
            debug!("pending submit cancelled");
        }
    }

    /// Runs a full submit cycle and reports the result to `notifier`.
    ///
    /// If the returned future is dropped before it completes, the session keeps the submit
    /// marked as pending; call [`Self::cancel_submit`] before submitting again.
    pub async fn submit<G, N>(
        &mut self,
        gateway: &G,
        notifier: &N,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        G: MutationGateway,
        N: Notifier,
    {
        let request = match self.begin_submit()? {
            SubmitPlan::NoOp => return Ok(SubmitOutcome::NoOp),
            SubmitPlan::Dispatch(request) => request,
        };
        let result = gateway.update_gift_card(&request).await;
        let outcome = self.complete_submit(result)?;
        if let Some(notification) = notification_for(&outcome) {
            notifier.notify(&notification);
        }
        Ok(outcome)
    }
}
