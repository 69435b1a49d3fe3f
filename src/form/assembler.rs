use super::validation::validate;
use super::{DocumentHost, Draft, FieldError};
use crate::config::Config;
use crate::dates::{format_birth_date, format_created_at};
use crate::error::{DocumentError, Result};
use crate::models::{DocumentTemplate, IssuerInfo, K5Document};
use crate::providers::{IdentityProvider, JobProvider};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// A single "create document" form: one template, one draft, one signing gate.
///
/// Identity and job are read through the providers whenever the issuer block
/// is needed, so a submitted document always carries the actor's state at the
/// moment of submission.
pub struct CreateDocument {
    template: DocumentTemplate,
    draft: Draft,
    signed: bool,
    attempted: bool,
    errors: Vec<FieldError>,
    identity: Arc<dyn IdentityProvider>,
    jobs: Arc<dyn JobProvider>,
    config: Arc<Config>,
    clock: fn() -> DateTime<Utc>,
}

impl CreateDocument {
    pub fn new(
        template: DocumentTemplate,
        identity: Arc<dyn IdentityProvider>,
        jobs: Arc<dyn JobProvider>,
        config: Arc<Config>,
    ) -> Self {
        info!(
            "Opening document form for template {:?} ({} fields)",
            template.document_name,
            template.fields.len()
        );
        let draft = Draft::from_template(&template);
        CreateDocument {
            template,
            draft,
            signed: false,
            attempted: false,
            errors: Vec::new(),
            identity,
            jobs,
            config,
            clock: Utc::now,
        }
    }

    /// Replaces the clock used for `createdAt`.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn template(&self) -> &DocumentTemplate {
        &self.template
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn set_signed(&mut self, signed: bool) {
        debug!("Signing gate set to {}", signed);
        self.signed = signed;
    }

    /// Errors from the most recent validation; empty until the first submit.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn set_field_value(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.draft.set_field_value(index, value)?;
        debug!("Field {} edited", index);
        self.revalidate();
        Ok(())
    }

    pub fn set_field_value_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<usize> {
        let index = self.draft.set_field_value_by_name(name, value)?;
        debug!("Field {} ({:?}) edited", index, name);
        self.revalidate();
        Ok(index)
    }

    pub fn set_info_value(&mut self, value: impl Into<String>) {
        self.draft.set_info_value(value);
        self.revalidate();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.set_name(value);
        self.revalidate();
    }

    /// Name shown next to the signature, from the live identity.
    pub fn signature_name(&self) -> String {
        let player = self.identity.player_data().unwrap_or_default();
        format!(
            "{} {}",
            player.firstname.unwrap_or_default(),
            player.lastname.unwrap_or_default()
        )
        .trim()
        .to_string()
    }

    /// The issuer block as it stands right now.
    ///
    /// This is what a host should display while editing; `submit` takes a new
    /// snapshot, which differs if the providers changed in between.
    pub fn issuer_preview(&self) -> IssuerInfo {
        self.issuer_snapshot()
    }

    /// Validates the draft and hands the finished document to `host`.
    ///
    /// Does nothing and returns `NotSigned` while the signing gate is closed.
    pub fn submit(&mut self, host: &mut dyn DocumentHost) -> Result<()> {
        if !self.signed {
            debug!("Submit ignored, document is not signed");
            return Err(DocumentError::NotSigned);
        }

        self.attempted = true;
        self.errors = validate(&self.draft, &self.config.texts);
        if !self.errors.is_empty() {
            info!("Submit blocked by {} invalid field(s)", self.errors.len());
            return Err(DocumentError::Validation(self.errors.clone()));
        }

        let document = K5Document {
            id: None,
            name: self.draft.name.clone(),
            document_name: self.template.document_name.clone(),
            created_at: format_created_at((self.clock)()),
            description: self.draft.description.clone(),
            fields: self.draft.fields.clone(),
            info_name: self.draft.info_name.clone(),
            info_value: self.draft.info_value.clone(),
            is_copy: false,
            issuer: self.issuer_snapshot(),
        };

        info!(
            "Document {:?} created with {} fields",
            document.name,
            document.fields.len()
        );
        host.on_create(document);
        Ok(())
    }

    /// Discards the draft and tells the host. Always allowed.
    pub fn cancel(self, host: &mut dyn DocumentHost) {
        info!("Document form for {:?} closed", self.template.document_name);
        host.on_close();
    }

    fn revalidate(&mut self) {
        if self.attempted {
            self.errors = validate(&self.draft, &self.config.texts);
        }
    }

    fn issuer_snapshot(&self) -> IssuerInfo {
        let player = self.identity.player_data().unwrap_or_default();
        let job = self.jobs.job();

        IssuerInfo {
            birth_date: format_birth_date(
                player.dateofbirth.as_deref(),
                &self.config.birth_date_input_formats,
                &self.config.date_format_short,
            ),
            firstname: player.firstname.unwrap_or_default(),
            lastname: player.lastname.unwrap_or_default(),
            job_name: job.map(|j| j.label).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::CallbackHost;
    use crate::models::{Field, Job, PlayerData};
    use crate::providers::SharedActor;
    use chrono::TimeZone;

    #[derive(Default)]
    struct RecordingHost {
        created: Vec<K5Document>,
        closed: usize,
    }

    impl DocumentHost for RecordingHost {
        fn on_create(&mut self, document: K5Document) {
            self.created.push(document);
        }

        fn on_close(&mut self) {
            self.closed += 1;
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap()
    }

    fn permit() -> DocumentTemplate {
        DocumentTemplate {
            id: None,
            min_grade: None,
            document_name: "Permit".to_string(),
            document_description: "Vehicle permit".to_string(),
            fields: vec![Field::new("Vehicle", "")],
            info_name: "Notes".to_string(),
            info_template: String::new(),
        }
    }

    fn actor() -> SharedActor {
        SharedActor::new(
            Some(PlayerData {
                firstname: Some("Ada".to_string()),
                lastname: Some("Lovelace".to_string()),
                dateofbirth: Some("1815-12-10".to_string()),
            }),
            Some(Job {
                label: "Police".to_string(),
                grade: 3,
                ..Job::default()
            }),
        )
    }

    fn form(template: DocumentTemplate, actor: &SharedActor) -> CreateDocument {
        CreateDocument::new(
            template,
            Arc::new(actor.clone()),
            Arc::new(actor.clone()),
            Arc::new(Config::default()),
        )
        .with_clock(fixed_now)
    }

    #[test]
    fn test_permit_is_created() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_field_value(0, "Truck42").unwrap();
        form.set_info_value("approved");
        form.set_signed(true);
        form.submit(&mut host).unwrap();

        assert_eq!(host.created.len(), 1);
        let doc = &host.created[0];
        assert_eq!(doc.id, None);
        assert_eq!(doc.name, "Permit");
        assert_eq!(doc.document_name, "Permit");
        assert_eq!(doc.description, "Vehicle permit");
        assert_eq!(doc.fields, vec![Field::new("Vehicle", "Truck42")]);
        assert_eq!(doc.info_name, "Notes");
        assert_eq!(doc.info_value, "approved");
        assert!(!doc.is_copy);
        assert_eq!(doc.created_at, "2026-10-15T09:00:00+00:00");
        assert_eq!(
            doc.issuer,
            IssuerInfo {
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
                birth_date: "10/12/1815".to_string(),
                job_name: "Police".to_string(),
            }
        );
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_empty_info_value_blocks_and_flags() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_field_value(0, "Truck42").unwrap();
        form.set_signed(true);
        let err = form.submit(&mut host).unwrap_err();

        assert!(host.created.is_empty());
        match err {
            DocumentError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field_path, "infoValue");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_every_empty_field_is_flagged() {
        let actor = actor();
        let mut template = permit();
        template.fields = vec![
            Field::new("Vehicle", ""),
            Field::new("Plate", "LS-1"),
            Field::new("Owner", ""),
        ];
        let mut form = form(template, &actor);
        let mut host = RecordingHost::default();

        form.set_signed(true);
        assert!(form.submit(&mut host).is_err());

        let paths: Vec<_> = form.errors().iter().map(|e| e.field_path.as_str()).collect();
        assert_eq!(paths, vec!["fields.0.value", "fields.2.value", "infoValue"]);
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_unsigned_submit_is_inert() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_field_value(0, "Truck42").unwrap();
        form.set_info_value("approved");
        assert!(matches!(form.submit(&mut host), Err(DocumentError::NotSigned)));

        let mut empty = self::form(permit(), &actor);
        assert!(matches!(empty.submit(&mut host), Err(DocumentError::NotSigned)));
        assert!(empty.errors().is_empty());

        assert!(host.created.is_empty());
    }

    #[test]
    fn test_unsigning_closes_the_gate_again() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_field_value(0, "Truck42").unwrap();
        form.set_info_value("approved");
        form.set_signed(true);
        form.set_signed(false);
        assert!(matches!(form.submit(&mut host), Err(DocumentError::NotSigned)));
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_cancel_never_validates_or_creates() {
        let actor = actor();
        let form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.cancel(&mut host);

        assert_eq!(host.closed, 1);
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_cancel_discards_a_ready_draft() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_field_value(0, "Truck42").unwrap();
        form.set_info_value("approved");
        form.set_signed(true);
        form.cancel(&mut host);

        // `form` is consumed, so no later submit can emit a document.
        assert_eq!(host.closed, 1);
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_issuer_is_read_at_submission() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        assert_eq!(form.issuer_preview().firstname, "Ada");

        actor.set_player_data(Some(PlayerData {
            firstname: Some("Grace".to_string()),
            lastname: Some("Hopper".to_string()),
            dateofbirth: Some("12/09/1906".to_string()),
        }));
        actor.set_job(Some(Job {
            label: "Navy".to_string(),
            ..Job::default()
        }));

        form.set_field_value(0, "Truck42").unwrap();
        form.set_info_value("approved");
        form.set_signed(true);
        form.submit(&mut host).unwrap();

        let issuer = &host.created[0].issuer;
        assert_eq!(issuer.firstname, "Grace");
        assert_eq!(issuer.lastname, "Hopper");
        assert_eq!(issuer.birth_date, "09/12/1906");
        assert_eq!(issuer.job_name, "Navy");
    }

    #[test]
    fn test_missing_identity_degrades_to_empty_strings() {
        let actor = SharedActor::default();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_field_value(0, "Truck42").unwrap();
        form.set_info_value("approved");
        form.set_signed(true);
        form.submit(&mut host).unwrap();

        assert_eq!(host.created[0].issuer, IssuerInfo::default());
        assert_eq!(form.signature_name(), "");
    }

    #[test]
    fn test_fields_keep_template_order_and_names() {
        let actor = actor();
        let mut template = permit();
        template.fields = vec![
            Field::new("C", ""),
            Field::new("A", ""),
            Field::new("B", "preset"),
        ];
        let mut form = form(template, &actor);
        let mut host = RecordingHost::default();

        form.set_field_value_by_name("A", "1").unwrap();
        form.set_field_value(0, "3").unwrap();
        form.set_info_value("ok");
        form.set_signed(true);
        form.submit(&mut host).unwrap();

        assert_eq!(
            host.created[0].fields,
            vec![Field::new("C", "3"), Field::new("A", "1"), Field::new("B", "preset")]
        );
    }

    #[test]
    fn test_errors_clear_as_fields_are_fixed_after_failed_submit() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_info_value("");
        assert!(form.errors().is_empty());

        form.set_signed(true);
        assert!(form.submit(&mut host).is_err());
        assert_eq!(form.errors().len(), 2);

        form.set_field_value(0, "Truck42").unwrap();
        assert_eq!(form.errors().len(), 1);
        form.set_info_value("approved");
        assert!(form.errors().is_empty());

        form.submit(&mut host).unwrap();
        assert_eq!(host.created.len(), 1);
    }

    #[test]
    fn test_edited_name_is_used() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        let mut host = RecordingHost::default();

        form.set_name("Permit #7");
        form.set_field_value(0, "Truck42").unwrap();
        form.set_info_value("approved");
        form.set_signed(true);
        form.submit(&mut host).unwrap();

        assert_eq!(host.created[0].name, "Permit #7");
        assert_eq!(host.created[0].document_name, "Permit");
    }

    #[test]
    fn test_signature_name_and_callback_host() {
        let actor = actor();
        let mut form = form(permit(), &actor);
        assert_eq!(form.signature_name(), "Ada Lovelace");

        let mut created = Vec::new();
        let mut closed = 0;
        {
            let mut host = CallbackHost::new(|doc| created.push(doc), || closed += 1);
            form.set_field_value(0, "Truck42").unwrap();
            form.set_info_value("approved");
            form.set_signed(true);
            form.submit(&mut host).unwrap();
            form.cancel(&mut host);
        }

        assert_eq!(created.len(), 1);
        assert!(created.iter().all(|d| !d.is_copy));
        assert_eq!(closed, 1);
    }
}
