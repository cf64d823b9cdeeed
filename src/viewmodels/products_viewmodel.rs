use super::validation::FetchOutcome;
use crate::models::Listing;
use crate::services::ApiError;
use crate::utils::constants::MSG_PRODUCTS_FETCH_FAILED;

/// Browse/search state. Filtering happens on the backend; this only keeps
/// the raw search text and the last page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsViewModel {
    pub search: String,
    pub products: Vec<Listing>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProductsViewModel {
    fn default() -> Self {
        Self {
            search: String::new(),
            products: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl ProductsViewModel {
    /// Trimmed search text, `None` when blank.
    pub fn query(&self) -> Option<String> {
        let query = self.search.trim();
        (!query.is_empty()).then(|| query.to_string())
    }

    pub fn begin_fetch(&mut self) -> Option<String> {
        self.loading = true;
        self.error = None;
        self.query()
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Listing>, ApiError>) -> FetchOutcome {
        self.loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                FetchOutcome::Loaded(self.products.len())
            }
            Err(err) => {
                let outcome = FetchOutcome::from_error(&err, MSG_PRODUCTS_FETCH_FAILED);
                if let FetchOutcome::Failed(message) = &outcome {
                    self.error = Some(message.clone());
                }
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::tests::ScriptedTransport;
    use crate::services::ApiClient;
    use futures::executor::block_on;

    #[test]
    fn search_text_is_forwarded_trimmed() {
        let transport = ScriptedTransport::default()
            .reply(200, r#"[{"_id":"1","name":"Lab coat","price":200}]"#);
        let api = ApiClient::with_transport("https://api.test", transport.clone());

        let mut vm = ProductsViewModel {
            search: "  coat ".into(),
            ..Default::default()
        };
        let query = vm.begin_fetch();
        let outcome = vm.apply_fetch(block_on(api.products(Some("tok"), query.as_deref())));

        assert_eq!(outcome, FetchOutcome::Loaded(1));
        assert_eq!(vm.products[0].price, "200");
        assert_eq!(
            transport.last().query,
            vec![("name".to_string(), "coat".to_string())]
        );
    }

    #[test]
    fn blank_search_fetches_everything() {
        let vm = ProductsViewModel {
            search: "   ".into(),
            ..Default::default()
        };
        assert_eq!(vm.query(), None);
    }

    #[test]
    fn failed_search_keeps_previous_results() {
        let mut vm = ProductsViewModel::default();
        vm.apply_fetch(Ok(vec![Listing::default()]));
        vm.begin_fetch();
        let outcome = vm.apply_fetch(Err(ApiError::Network("down".into())));
        assert_eq!(outcome, FetchOutcome::Failed(MSG_PRODUCTS_FETCH_FAILED.into()));
        assert_eq!(vm.products.len(), 1);
        assert_eq!(vm.error.as_deref(), Some(MSG_PRODUCTS_FETCH_FAILED));

        assert_eq!(
            vm.apply_fetch(Err(ApiError::Unauthenticated)),
            FetchOutcome::RedirectToLogin
        );
    }
}
