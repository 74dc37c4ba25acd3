use crate::application::lookup::{LookupFeedback, LookupSequence, RequestToken};
use crate::application::session::CartSession;
use crate::domain::cart::PayerInfo;
use crate::domain::catalog::PlanCatalog;
use crate::domain::coverage::{CoverageArea, street_type_id};
use crate::domain::identity::{NationalId, PostalCode};
use crate::domain::person::{Dependent, PersonRecord, Sex};
use crate::domain::plan::{BillingCycle, Plan};
use crate::domain::ports::{AddressDirectoryBox, PersonDirectoryBox, ResolvedAddress};
use crate::domain::quote::{FinancialQuote, compute_quote};
use crate::error::{CheckoutError, Result};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Steps of the checkout flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Address,
    PersonalData,
    Payment,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Address => 1,
            WizardStep::PersonalData => 2,
            WizardStep::Payment => 3,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Address => None,
            WizardStep::PersonalData => Some(WizardStep::Address),
            WizardStep::Payment => Some(WizardStep::PersonalData),
        }
    }
}

/// Inline validation message for a single form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn field_error(field: impl Into<String>, message: &str) -> FieldError {
    FieldError {
        field: field.into(),
        message: message.to_string(),
    }
}

fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

fn has_phone_digits(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// Address step form. The postal lookup autofills it; every field stays
/// editable so the user can proceed manually when the lookup misses.
#[derive(Debug, Default)]
pub struct AddressForm {
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub locality: String,
    pub region: String,
    pub complement: String,
    pub feedback: Option<LookupFeedback>,
    lookup: LookupSequence,
}

impl AddressForm {
    pub fn validation_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if PostalCode::parse(&self.postal_code).is_err() {
            errors.push(field_error("postal_code", "Postal code must have 8 digits"));
        }
        for (field, value, message) in [
            ("street", &self.street, "Street is required"),
            ("number", &self.number, "Number is required"),
            ("district", &self.district, "District is required"),
            ("locality", &self.locality, "Locality is required"),
            ("region", &self.region, "Region is required"),
        ] {
            if value.trim().is_empty() {
                errors.push(field_error(field, message));
            }
        }
        errors
    }

    fn apply(&mut self, resolved: &ResolvedAddress) {
        self.street = resolved.street.clone();
        self.district = resolved.district.clone();
        self.locality = resolved.locality.clone();
        self.region = resolved.region.clone();
    }

    fn clear_resolved(&mut self) {
        self.street.clear();
        self.district.clear();
        self.locality.clear();
        self.region.clear();
    }
}

/// Contract-holder section of the personal-data step.
#[derive(Debug, Default)]
pub struct HolderForm {
    pub national_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub mother_name: String,
    pub sex: Option<Sex>,
    pub feedback: Option<LookupFeedback>,
    lookup: LookupSequence,
}

impl HolderForm {
    fn apply(&mut self, record: &PersonRecord) {
        self.full_name = record.full_name.clone();
        self.birth_date = Some(record.birth_date);
        if let Some(mother) = &record.mother_name {
            self.mother_name = mother.clone();
        }
        self.sex = Some(record.sex);
    }

    pub fn validation_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.full_name.trim().chars().count() < 5 {
            errors.push(field_error("full_name", "Full name is required"));
        }
        if NationalId::parse(&self.national_id).is_err() {
            errors.push(field_error("national_id", "National id must have 11 digits"));
        }
        if !is_plausible_email(&self.email) {
            errors.push(field_error("email", "Email address is invalid"));
        }
        if !has_phone_digits(&self.phone) {
            errors.push(field_error("phone", "Phone must have at least 10 digits"));
        }
        if self.birth_date.is_none() {
            errors.push(field_error("birth_date", "Birth date is required"));
        }
        if self.sex.is_none() {
            errors.push(field_error("sex", "Select the sex"));
        }
        errors
    }
}

/// One dependent row of the personal-data step.
#[derive(Debug, Default)]
pub struct DependentForm {
    pub national_id: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<Sex>,
    pub relationship: String,
    pub feedback: Option<LookupFeedback>,
    lookup: LookupSequence,
}

impl DependentForm {
    fn apply(&mut self, record: &PersonRecord) {
        self.full_name = record.full_name.clone();
        self.birth_date = Some(record.birth_date);
        self.sex = Some(record.sex);
    }

    pub fn validation_errors(&self, index: usize) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.full_name.trim().chars().count() < 5 {
            errors.push(field_error(
                format!("dependents[{index}].full_name"),
                "Full name is required",
            ));
        }
        if NationalId::parse(&self.national_id).is_err() {
            errors.push(field_error(
                format!("dependents[{index}].national_id"),
                "National id must have 11 digits",
            ));
        }
        if self.birth_date.is_none() {
            errors.push(field_error(
                format!("dependents[{index}].birth_date"),
                "Birth date is required",
            ));
        }
        if self.sex.is_none() {
            errors.push(field_error(format!("dependents[{index}].sex"), "Select the sex"));
        }
        if self.relationship.trim().is_empty() {
            errors.push(field_error(
                format!("dependents[{index}].relationship"),
                "Relationship is required",
            ));
        }
        errors
    }
}

/// Personal-data step form: holder plus a dependent list.
#[derive(Debug, Default)]
pub struct PersonalDataForm {
    pub holder: HolderForm,
    pub dependents: Vec<DependentForm>,
}

impl PersonalDataForm {
    pub fn validation_errors(&self) -> Vec<FieldError> {
        let mut errors = self.holder.validation_errors();
        for (index, dependent) in self.dependents.iter().enumerate() {
            errors.extend(dependent.validation_errors(index));
        }
        errors
    }

    fn has_pending_lookup(&self) -> bool {
        self.holder.lookup.is_pending()
            || self.dependents.iter().any(|form| form.lookup.is_pending())
    }
}

/// Payment step form: either the holder pays, or a third party fully
/// identified by the four contact fields.
#[derive(Debug)]
pub struct PaymentForm {
    pub holder_pays: bool,
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            holder_pays: true,
            full_name: String::new(),
            national_id: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl PaymentForm {
    pub fn validation_errors(&self) -> Vec<FieldError> {
        if self.holder_pays {
            return Vec::new();
        }
        let mut errors = Vec::new();
        if self.full_name.trim().chars().count() < 5 {
            errors.push(field_error("payer.full_name", "Full name is required"));
        }
        if NationalId::parse(&self.national_id).is_err() {
            errors.push(field_error("payer.national_id", "National id must have 11 digits"));
        }
        if !is_plausible_email(&self.email) {
            errors.push(field_error("payer.email", "Email address is invalid"));
        }
        if !has_phone_digits(&self.phone) {
            errors.push(field_error("payer.phone", "Phone must have at least 10 digits"));
        }
        errors
    }

    fn to_payer(&self) -> Result<PayerInfo> {
        if self.holder_pays {
            return Ok(PayerInfo::Holder);
        }
        Ok(PayerInfo::ThirdParty {
            full_name: self.full_name.trim().to_string(),
            national_id: NationalId::parse(&self.national_id)?,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Result of applying a postal-code lookup response to the address step.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressLookupStatus {
    /// Address applied and the locality is serviced.
    Applied { city_code: u32 },
    /// Address resolved but the locality is not serviced. Resolved fields
    /// are cleared so the unserviced address is not submitted by accident.
    OutOfCoverage { locality: String },
    /// Clean miss; the user fills the address manually.
    NotFound,
    /// Transport failure; the user may retry or fill the address manually.
    Failed(String),
    /// A newer request superseded this response; nothing was applied.
    Stale,
}

/// Result of applying a registry lookup response to a person row.
#[derive(Debug, Clone, PartialEq)]
pub enum PersonLookupStatus {
    Applied,
    NotFound,
    Failed(String),
    Stale,
}

/// Contract holder as submitted downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Holder {
    pub full_name: String,
    pub national_id: NationalId,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub mother_name: Option<String>,
}

/// Enrollment address as submitted downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentAddress {
    pub postal_code: PostalCode,
    pub street: String,
    pub number: String,
    pub district: String,
    pub locality: String,
    pub region: String,
    pub complement: Option<String>,
    pub city_code: u32,
    pub street_type: u32,
}

/// Hand-off record for the downstream enrollment service.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentSubmission {
    pub plan: Plan,
    pub billing_cycle: BillingCycle,
    pub holder: Holder,
    pub dependents: Vec<Dependent>,
    pub address: EnrollmentAddress,
    pub payer: PayerInfo,
}

/// Outcome of entering the checkout flow.
pub enum WizardEntry {
    Started(CheckoutWizard),
    /// No plan in the cart; the caller returns the user to plan selection.
    RedirectToPlanSelection(CartSession),
}

/// Sequencer for the three-step checkout flow.
///
/// Owns the step forms, gates forward navigation on validation and on
/// lookups having settled, and bridges dependent-list changes into the cart
/// so the quote projection reflects them immediately. Holds no pricing
/// logic of its own.
pub struct CheckoutWizard {
    session: CartSession,
    person_directory: PersonDirectoryBox,
    address_directory: AddressDirectoryBox,
    coverage: CoverageArea,
    step: WizardStep,
    pub address: AddressForm,
    pub personal: PersonalDataForm,
    pub payment: PaymentForm,
}

impl CheckoutWizard {
    /// Enters the flow. A cart without a selected plan cannot check out and
    /// is redirected back to plan selection; that is a precondition, not an
    /// error.
    pub fn enter(
        session: CartSession,
        person_directory: PersonDirectoryBox,
        address_directory: AddressDirectoryBox,
        coverage: CoverageArea,
    ) -> WizardEntry {
        if session.cart().selected_plan.is_none() {
            info!("checkout entered without a plan, redirecting to plan selection");
            return WizardEntry::RedirectToPlanSelection(session);
        }
        WizardEntry::Started(Self {
            session,
            person_directory,
            address_directory,
            coverage,
            step: WizardStep::Address,
            address: AddressForm::default(),
            personal: PersonalDataForm::default(),
            payment: PaymentForm::default(),
        })
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn session(&self) -> &CartSession {
        &self.session
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.session.cart().selected_plan.as_ref()
    }

    /// Recomputes the quote from the current cart snapshot. The summary
    /// panel is a pure projection of this value.
    pub fn quote(&self, catalog: &PlanCatalog, as_of: NaiveDate) -> FinancialQuote {
        let cart = self.session.snapshot();
        let plan_id = cart
            .selected_plan
            .as_ref()
            .map(|plan| plan.id.as_str())
            .unwrap_or_default();
        compute_quote(
            catalog,
            plan_id,
            cart.dependents_count,
            cart.billing_cycle,
            as_of,
        )
    }

    /// True when the active step's form validates and no lookup for it is
    /// in flight.
    pub fn can_confirm(&self) -> bool {
        match self.step {
            WizardStep::Address => {
                self.address.validation_errors().is_empty() && !self.address.lookup.is_pending()
            }
            WizardStep::PersonalData => {
                self.personal.validation_errors().is_empty()
                    && !self.personal.has_pending_lookup()
            }
            WizardStep::Payment => self.payment.validation_errors().is_empty(),
        }
    }

    /// Returns to the previous step. Data entered in the step being left is
    /// kept.
    pub fn back(&mut self) -> Option<WizardStep> {
        let previous = self.step.previous()?;
        debug!(from = self.step.number(), to = previous.number(), "step back");
        self.step = previous;
        Some(previous)
    }

    fn ensure_step(&self, expected: WizardStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(CheckoutError::Validation(format!(
                "Step {} is not active",
                expected.number()
            )))
        }
    }

    // --- Address step -----------------------------------------------------

    /// Starts a postal-code lookup. Malformed codes are rejected before any
    /// request is issued.
    pub fn begin_postal_lookup(&mut self) -> Result<(RequestToken, PostalCode)> {
        let code = PostalCode::parse(&self.address.postal_code)?;
        let token = self.address.lookup.begin();
        debug!(postal_code = %code, "postal lookup started");
        Ok((token, code))
    }

    /// Applies a postal-lookup response. Responses carrying a superseded
    /// token are discarded.
    pub fn apply_postal_lookup(
        &mut self,
        token: RequestToken,
        outcome: Result<Option<ResolvedAddress>>,
    ) -> AddressLookupStatus {
        if !self.address.lookup.accept(token) {
            warn!("discarding stale postal lookup response");
            return AddressLookupStatus::Stale;
        }
        match outcome {
            Ok(Some(resolved)) => match self.coverage.city_code(&resolved.locality) {
                Some(city_code) => {
                    self.address.apply(&resolved);
                    self.address.feedback = Some(LookupFeedback::Found);
                    AddressLookupStatus::Applied { city_code }
                }
                None => {
                    info!(locality = %resolved.locality, "locality outside coverage area");
                    self.address.clear_resolved();
                    self.address.feedback =
                        Some(LookupFeedback::OutOfCoverage(resolved.locality.clone()));
                    AddressLookupStatus::OutOfCoverage {
                        locality: resolved.locality,
                    }
                }
            },
            Ok(None) => {
                self.address.feedback = Some(LookupFeedback::NotFound);
                AddressLookupStatus::NotFound
            }
            Err(error) => {
                warn!(%error, "postal lookup failed");
                let message = error.to_string();
                self.address.feedback = Some(LookupFeedback::Failed(message.clone()));
                AddressLookupStatus::Failed(message)
            }
        }
    }

    /// Blur-triggered convenience: begin, query the directory, apply.
    pub async fn autofill_address(&mut self) -> Result<AddressLookupStatus> {
        let (token, code) = self.begin_postal_lookup()?;
        let outcome = self.address_directory.find_by_postal_code(&code).await;
        Ok(self.apply_postal_lookup(token, outcome))
    }

    /// Confirms the address step. Coverage is the one lookup outcome that
    /// hard-blocks: the locality on the form must be serviced, whether it
    /// was autofilled or typed in.
    pub fn confirm_address(&mut self) -> Result<WizardStep> {
        self.ensure_step(WizardStep::Address)?;
        if self.address.lookup.is_pending() {
            return Err(CheckoutError::Validation(
                "Postal code lookup still in flight".to_string(),
            ));
        }
        if let Some(error) = self.address.validation_errors().into_iter().next() {
            return Err(CheckoutError::Validation(error.message));
        }
        let locality = self.address.locality.trim().to_string();
        if !self.coverage.covers(&locality) {
            info!(%locality, "address step blocked, locality not covered");
            return Err(CheckoutError::OutOfCoverage(locality));
        }
        debug!("address step confirmed");
        self.step = WizardStep::PersonalData;
        Ok(self.step)
    }

    // --- Personal-data step -----------------------------------------------

    /// Appends a dependent row and pushes the new list length into the cart
    /// at once, so the quote reflects it before the step is confirmed.
    pub fn add_dependent(&mut self) -> Result<usize> {
        self.personal.dependents.push(DependentForm::default());
        self.sync_dependents_count()?;
        Ok(self.personal.dependents.len() - 1)
    }

    pub fn remove_dependent(&mut self, index: usize) -> Result<()> {
        if index >= self.personal.dependents.len() {
            return Err(CheckoutError::Validation(format!(
                "No dependent at index {index}"
            )));
        }
        self.personal.dependents.remove(index);
        self.sync_dependents_count()
    }

    fn sync_dependents_count(&mut self) -> Result<()> {
        // Always the list length, never an increment.
        self.session
            .set_dependents_count(self.personal.dependents.len() as u32)
    }

    pub fn begin_holder_lookup(&mut self) -> Result<(RequestToken, NationalId)> {
        let id = NationalId::parse(&self.personal.holder.national_id)?;
        let token = self.personal.holder.lookup.begin();
        debug!(national_id = %id, "holder registry lookup started");
        Ok((token, id))
    }

    pub fn apply_holder_lookup(
        &mut self,
        token: RequestToken,
        outcome: Result<Option<PersonRecord>>,
    ) -> PersonLookupStatus {
        if !self.personal.holder.lookup.accept(token) {
            warn!("discarding stale holder lookup response");
            return PersonLookupStatus::Stale;
        }
        apply_person_outcome(&mut self.personal.holder, outcome)
    }

    pub async fn autofill_holder(&mut self) -> Result<PersonLookupStatus> {
        let (token, id) = self.begin_holder_lookup()?;
        let outcome = self.person_directory.find_by_national_id(&id).await;
        Ok(self.apply_holder_lookup(token, outcome))
    }

    pub fn begin_dependent_lookup(&mut self, index: usize) -> Result<(RequestToken, NationalId)> {
        let form = self.personal.dependents.get_mut(index).ok_or_else(|| {
            CheckoutError::Validation(format!("No dependent at index {index}"))
        })?;
        let id = NationalId::parse(&form.national_id)?;
        let token = form.lookup.begin();
        debug!(national_id = %id, index, "dependent registry lookup started");
        Ok((token, id))
    }

    /// Applies a dependent lookup response. A row removed while the request
    /// was in flight swallows the response as stale.
    pub fn apply_dependent_lookup(
        &mut self,
        index: usize,
        token: RequestToken,
        outcome: Result<Option<PersonRecord>>,
    ) -> PersonLookupStatus {
        let Some(form) = self.personal.dependents.get_mut(index) else {
            warn!(index, "discarding lookup response for a removed dependent row");
            return PersonLookupStatus::Stale;
        };
        if !form.lookup.accept(token) {
            warn!(index, "discarding stale dependent lookup response");
            return PersonLookupStatus::Stale;
        }
        apply_person_outcome(form, outcome)
    }

    pub async fn autofill_dependent(&mut self, index: usize) -> Result<PersonLookupStatus> {
        let (token, id) = self.begin_dependent_lookup(index)?;
        let outcome = self.person_directory.find_by_national_id(&id).await;
        Ok(self.apply_dependent_lookup(index, token, outcome))
    }

    /// Confirms the personal-data step: the holder and every dependent row
    /// must validate, and no registry lookup may be in flight.
    pub fn confirm_personal_data(&mut self) -> Result<WizardStep> {
        self.ensure_step(WizardStep::PersonalData)?;
        if self.personal.has_pending_lookup() {
            return Err(CheckoutError::Validation(
                "Registry lookup still in flight".to_string(),
            ));
        }
        if let Some(error) = self.personal.validation_errors().into_iter().next() {
            return Err(CheckoutError::Validation(format!(
                "{}: {}",
                error.field, error.message
            )));
        }
        debug!(
            dependents = self.personal.dependents.len(),
            "personal data step confirmed"
        );
        self.step = WizardStep::Payment;
        Ok(self.step)
    }

    // --- Payment step -----------------------------------------------------

    /// Confirms the payment step: commits the payer to the cart and
    /// assembles the downstream enrollment hand-off.
    pub fn confirm_payment(&mut self) -> Result<EnrollmentSubmission> {
        self.ensure_step(WizardStep::Payment)?;
        if let Some(error) = self.payment.validation_errors().into_iter().next() {
            return Err(CheckoutError::Validation(format!(
                "{}: {}",
                error.field, error.message
            )));
        }
        let payer = self.payment.to_payer()?;
        let holder = self.holder_record()?;
        let dependents = self
            .personal
            .dependents
            .iter()
            .map(dependent_record)
            .collect::<Result<Vec<_>>>()?;
        let address = self.enrollment_address()?;

        self.session.set_payer(payer.clone())?;
        let cart = self.session.cart();
        let plan = cart
            .selected_plan
            .clone()
            .ok_or_else(|| CheckoutError::Validation("No plan selected".to_string()))?;

        info!(plan = %plan.id, people = dependents.len() + 1, "checkout confirmed");
        Ok(EnrollmentSubmission {
            plan,
            billing_cycle: cart.billing_cycle,
            holder,
            dependents,
            address,
            payer,
        })
    }

    fn holder_record(&self) -> Result<Holder> {
        let form = &self.personal.holder;
        Ok(Holder {
            full_name: form.full_name.trim().to_string(),
            national_id: NationalId::parse(&form.national_id)?,
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            birth_date: form
                .birth_date
                .ok_or_else(|| CheckoutError::Validation("Birth date is required".to_string()))?,
            sex: form
                .sex
                .ok_or_else(|| CheckoutError::Validation("Select the sex".to_string()))?,
            mother_name: Some(form.mother_name.trim().to_string())
                .filter(|name| !name.is_empty()),
        })
    }

    fn enrollment_address(&self) -> Result<EnrollmentAddress> {
        let form = &self.address;
        let locality = form.locality.trim().to_string();
        let city_code = self
            .coverage
            .city_code(&locality)
            .ok_or_else(|| CheckoutError::OutOfCoverage(locality.clone()))?;
        Ok(EnrollmentAddress {
            postal_code: PostalCode::parse(&form.postal_code)?,
            street: form.street.trim().to_string(),
            number: form.number.trim().to_string(),
            district: form.district.trim().to_string(),
            locality,
            region: form.region.trim().to_string(),
            complement: Some(form.complement.trim().to_string())
                .filter(|value| !value.is_empty()),
            city_code,
            street_type: street_type_id(&form.street),
        })
    }
}

fn dependent_record(form: &DependentForm) -> Result<Dependent> {
    Ok(Dependent {
        full_name: form.full_name.trim().to_string(),
        national_id: NationalId::parse(&form.national_id)?,
        birth_date: form
            .birth_date
            .ok_or_else(|| CheckoutError::Validation("Birth date is required".to_string()))?,
        sex: form
            .sex
            .ok_or_else(|| CheckoutError::Validation("Select the sex".to_string()))?,
        relationship: form.relationship.trim().to_string(),
    })
}

/// A form row the registry autofill can write into.
trait AutofillTarget {
    fn apply_record(&mut self, record: &PersonRecord);
    fn set_feedback(&mut self, feedback: LookupFeedback);
}

impl AutofillTarget for HolderForm {
    fn apply_record(&mut self, record: &PersonRecord) {
        self.apply(record);
    }

    fn set_feedback(&mut self, feedback: LookupFeedback) {
        self.feedback = Some(feedback);
    }
}

impl AutofillTarget for DependentForm {
    fn apply_record(&mut self, record: &PersonRecord) {
        self.apply(record);
    }

    fn set_feedback(&mut self, feedback: LookupFeedback) {
        self.feedback = Some(feedback);
    }
}

fn apply_person_outcome<T: AutofillTarget>(
    form: &mut T,
    outcome: Result<Option<PersonRecord>>,
) -> PersonLookupStatus {
    match outcome {
        Ok(Some(record)) => {
            form.apply_record(&record);
            form.set_feedback(LookupFeedback::Found);
            PersonLookupStatus::Applied
        }
        Ok(None) => {
            form.set_feedback(LookupFeedback::NotFound);
            PersonLookupStatus::NotFound
        }
        Err(error) => {
            warn!(%error, "registry lookup failed");
            let message = error.to_string();
            form.set_feedback(LookupFeedback::Failed(message.clone()));
            PersonLookupStatus::Failed(message)
        }
    }
}
