//! KMS configuration screen: API operations plus the pure view-state
//! transitions the page renders from.

use pylon_core::{KmsConfigForm, KmsProvider, RemoteData};
use thiserror::Error;

use crate::client::{AuthenticatedPlatformClient, ClientError};
use crate::types::KmsConfigEntry;

/// Which of the two screens the page shows once loading settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    List,
    #[default]
    Create,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Field-scoped failures; the backend was never contacted.
    #[error("form validation failed")]
    Validation(Vec<pylon_core::FieldError>),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// What has to happen after a delete is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// The sole remaining config was deleted: show the creation form,
    /// no refetch needed.
    RevertToCreate,
    /// Others remain: refetch the list and stay on it.
    Refetch,
}

/// Renderable state of the configuration page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmsScreenState {
    pub configs: RemoteData<Vec<KmsConfigEntry>>,
    pub view: ViewMode,
}

impl KmsScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page renders a loading indicator while this holds.
    pub fn is_pending(&self) -> bool {
        self.configs.is_pending()
    }

    pub fn begin_load(&mut self) {
        self.configs = RemoteData::Loading;
    }

    /// Initial fetch settled: show the list as soon as any config exists,
    /// the creation form otherwise.
    pub fn on_loaded(&mut self, result: Result<Vec<KmsConfigEntry>, ClientError>) {
        match result {
            Ok(list) => {
                self.view = if list.is_empty() {
                    ViewMode::Create
                } else {
                    ViewMode::List
                };
                self.configs = RemoteData::Success(list);
            }
            Err(err) => self.configs = RemoteData::Error(err.to_string()),
        }
    }

    /// A successful submission lands on the refreshed list.
    pub fn on_submitted(&mut self, list: Vec<KmsConfigEntry>) {
        self.configs = RemoteData::Success(list);
        self.view = ViewMode::List;
    }

    /// Decide the follow-up for a dispatched delete, based on the list
    /// currently shown.
    pub fn delete_step(&self) -> DeleteStep {
        let remaining = self.configs.success().map_or(0, Vec::len);
        if remaining <= 1 {
            DeleteStep::RevertToCreate
        } else {
            DeleteStep::Refetch
        }
    }

    pub fn revert_to_create(&mut self) {
        self.configs = RemoteData::Success(Vec::new());
        self.view = ViewMode::Create;
    }

    pub fn on_refetched(&mut self, list: Vec<KmsConfigEntry>) {
        self.configs = RemoteData::Success(list);
    }

    pub fn open_create(&mut self) {
        self.view = ViewMode::Create;
    }
}

/// API operations behind the configuration page.
pub struct KmsService {
    client: AuthenticatedPlatformClient,
}

impl KmsService {
    pub fn new(client: AuthenticatedPlatformClient) -> Self {
        Self { client }
    }

    pub async fn fetch(&self) -> Result<Vec<KmsConfigEntry>, ClientError> {
        self.client.kms_config_list().await
    }

    /// Validate, normalize, and submit the form, then refetch the list.
    /// Validation failures never reach the backend.
    pub async fn submit(
        &self,
        form: &KmsConfigForm,
    ) -> Result<Vec<KmsConfigEntry>, SubmitError> {
        let params = form.to_params().map_err(SubmitError::Validation)?;
        self.client
            .set_kms_config(params.provider(), &params)
            .await?;
        Ok(self.fetch().await?)
    }

    pub async fn delete(&self, provider: KmsProvider) -> Result<(), ClientError> {
        self.client.delete_kms_config(provider).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(provider: KmsProvider) -> KmsConfigEntry {
        KmsConfigEntry {
            provider,
            credentials: serde_json::Value::Null,
        }
    }

    #[test]
    fn fresh_screen_is_pending_on_create_view() {
        let state = KmsScreenState::new();
        assert!(state.is_pending());
        assert_eq!(state.view, ViewMode::Create);
    }

    #[test]
    fn loading_empty_list_shows_creation_form() {
        let mut state = KmsScreenState::new();
        state.begin_load();
        assert!(state.is_pending());
        state.on_loaded(Ok(Vec::new()));
        assert!(!state.is_pending());
        assert_eq!(state.view, ViewMode::Create);
    }

    #[test]
    fn loading_existing_configs_shows_list() {
        let mut state = KmsScreenState::new();
        state.on_loaded(Ok(vec![entry(KmsProvider::Aws)]));
        assert_eq!(state.view, ViewMode::List);
    }

    #[test]
    fn load_failure_surfaces_error_state() {
        let mut state = KmsScreenState::new();
        state.on_loaded(Err(ClientError::Configuration("no base url".into())));
        assert!(state.configs.error().is_some());
    }

    #[test]
    fn deleting_sole_config_reverts_to_creation_form() {
        let mut state = KmsScreenState::new();
        state.on_loaded(Ok(vec![entry(KmsProvider::SmartKey)]));
        assert_eq!(state.delete_step(), DeleteStep::RevertToCreate);

        state.revert_to_create();
        assert_eq!(state.view, ViewMode::Create);
        assert_eq!(state.configs.success().map(Vec::len), Some(0));
    }

    #[test]
    fn deleting_one_of_several_refetches_and_stays_on_list() {
        let mut state = KmsScreenState::new();
        state.on_loaded(Ok(vec![entry(KmsProvider::SmartKey), entry(KmsProvider::Aws)]));
        assert_eq!(state.delete_step(), DeleteStep::Refetch);

        state.on_refetched(vec![entry(KmsProvider::Aws)]);
        assert_eq!(state.view, ViewMode::List);
        assert_eq!(state.configs.success().map(Vec::len), Some(1));
    }

    #[test]
    fn submission_switches_to_list_view() {
        let mut state = KmsScreenState::new();
        state.on_loaded(Ok(Vec::new()));
        assert_eq!(state.view, ViewMode::Create);

        state.on_submitted(vec![entry(KmsProvider::SmartKey)]);
        assert_eq!(state.view, ViewMode::List);
    }
}
