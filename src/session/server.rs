use crate::config::Config;
use crate::error::{DocumentError, Result};
use crate::form::{CreateDocument, DocumentHost};
use crate::models::{DocumentTemplate, Job, K5Document, PlayerData};
use crate::providers::{JobProvider, SharedActor};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Drives one document form from JSON requests, one request at a time.
///
/// The session is the form's host: created documents are stamped with an id
/// and returned in the `submit` response, after which the form is dropped.
pub struct Session {
    actor: SharedActor,
    config: Arc<Config>,
    form: Option<CreateDocument>,
}

#[derive(Default)]
struct Outcome {
    created: Option<K5Document>,
}

impl DocumentHost for Outcome {
    fn on_create(&mut self, document: K5Document) {
        self.created = Some(document);
    }

    fn on_close(&mut self) {}
}

#[derive(Deserialize)]
struct OpenParams {
    template: DocumentTemplate,
}

#[derive(Deserialize)]
struct SetFieldParams {
    index: Option<usize>,
    name: Option<String>,
    value: String,
}

#[derive(Deserialize)]
struct ValueParams {
    value: String,
}

#[derive(Deserialize)]
struct SignParams {
    signed: bool,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self::with_actor(config, SharedActor::default())
    }

    pub fn with_actor(config: Config, actor: SharedActor) -> Self {
        Self {
            actor,
            config: Arc::new(config),
            form: None,
        }
    }

    pub fn has_open_form(&self) -> bool {
        self.form.is_some()
    }

    pub fn handle_request(&mut self, request: Value) -> Result<Value> {
        let method = request
            .get("method")
            .and_then(|m| m.as_str())
            .ok_or_else(|| DocumentError::InvalidArgument("Missing method".to_string()))?;
        let params = request.get("params").cloned().unwrap_or(Value::Null);

        match method {
            "ping" => Ok(json!({})),
            "playerData" => self.handle_player_data(params),
            "job" => self.handle_job(params),
            "open" => self.handle_open(params),
            "setField" => self.handle_set_field(params),
            "setName" => {
                let p: ValueParams = parse_params(params)?;
                let form = self.form_mut()?;
                form.set_name(p.value);
                Ok(json!({ "errors": form.errors() }))
            }
            "setInfo" => {
                let p: ValueParams = parse_params(params)?;
                let form = self.form_mut()?;
                form.set_info_value(p.value);
                Ok(json!({ "errors": form.errors() }))
            }
            "sign" => {
                let p: SignParams = parse_params(params)?;
                let form = self.form_mut()?;
                form.set_signed(p.signed);
                Ok(json!({ "signed": form.is_signed() }))
            }
            "submit" => self.handle_submit(),
            "cancel" => self.handle_cancel(),
            _ => Err(DocumentError::InvalidArgument(format!(
                "Unknown method: {}",
                method
            ))),
        }
    }

    fn handle_player_data(&mut self, params: Value) -> Result<Value> {
        let player_data: Option<PlayerData> = parse_params(params)?;
        self.actor.set_player_data(player_data);
        Ok(json!({}))
    }

    fn handle_job(&mut self, params: Value) -> Result<Value> {
        let job: Option<Job> = parse_params(params)?;
        self.actor.set_job(job);
        Ok(json!({}))
    }

    fn handle_open(&mut self, params: Value) -> Result<Value> {
        let OpenParams { template } = parse_params(params)?;

        if let Some(min_grade) = template.min_grade {
            let job = self.actor.job();
            if !template.is_available_to(job.as_ref()) {
                return Err(DocumentError::InsufficientGrade {
                    grade: job.map(|j| j.grade),
                    min_grade,
                });
            }
        }

        if self.form.is_some() {
            info!("Replacing the open document form");
        }

        let form = CreateDocument::new(
            template,
            Arc::new(self.actor.clone()),
            Arc::new(self.actor.clone()),
            self.config.clone(),
        );
        let response = json!({
            "documentName": form.template().document_name,
            "fields": form.draft().fields(),
            "issuer": form.issuer_preview(),
            "signatureName": form.signature_name(),
        });
        self.form = Some(form);
        Ok(response)
    }

    fn handle_set_field(&mut self, params: Value) -> Result<Value> {
        let p: SetFieldParams = parse_params(params)?;
        let form = self.form_mut()?;
        match (p.index, p.name) {
            (Some(index), _) => form.set_field_value(index, p.value)?,
            (None, Some(name)) => {
                form.set_field_value_by_name(&name, p.value)?;
            }
            (None, None) => {
                return Err(DocumentError::InvalidArgument(
                    "setField needs an index or a name".to_string(),
                ))
            }
        }
        Ok(json!({ "errors": form.errors() }))
    }

    fn handle_submit(&mut self) -> Result<Value> {
        let mut outcome = Outcome::default();
        match self.form_mut()?.submit(&mut outcome) {
            Ok(()) => {}
            Err(DocumentError::NotSigned) => return Ok(json!({ "status": "inert" })),
            Err(DocumentError::Validation(errors)) => {
                return Ok(json!({ "status": "invalid", "errors": errors }))
            }
            Err(e) => return Err(e),
        }

        let mut document = outcome.created.ok_or_else(|| {
            DocumentError::Internal("Submit succeeded without a document".to_string())
        })?;
        let id = Uuid::new_v4().to_string();
        info!("Document {} handed to host", id);
        document.id = Some(id);
        self.form = None;

        Ok(json!({ "status": "created", "document": document }))
    }

    fn handle_cancel(&mut self) -> Result<Value> {
        let form = self.form.take().ok_or(DocumentError::NoOpenForm)?;
        let mut outcome = Outcome::default();
        form.cancel(&mut outcome);
        Ok(json!({ "status": "closed" }))
    }

    fn form_mut(&mut self) -> Result<&mut CreateDocument> {
        self.form.as_mut().ok_or(DocumentError::NoOpenForm)
    }
}

fn parse_params<T: for<'de> Deserialize<'de>>(params: Value) -> Result<T> {
    serde_json::from_value(params)
        .map_err(|e| DocumentError::InvalidArgument(format!("Invalid params: {}", e)))
}
