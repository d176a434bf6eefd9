/// Form actions: submit and reset
use crate::{
    client::RecommendEndpoint,
    models::ProfileRequest,
    render::{self, Card},
    view::{Field, FormView},
};

/// Drives one submit/render cycle against an injected endpoint
pub struct Submitter<E> {
    endpoint: E,
}

impl<E: RecommendEndpoint> Submitter<E> {
    pub fn new(endpoint: E) -> Self {
        Self { endpoint }
    }

    /// Reads the current field values, shows the loading state, performs
    /// one exchange, and replaces the results area with the outcome.
    ///
    /// Every failure is rendered inline; the caller has no error channel
    /// and the form stays usable afterwards.
    pub async fn submit_profile(&self, view: &mut dyn FormView) {
        let request = ProfileRequest::from_fields(
            &view.input(Field::Skills),
            &view.input(Field::Sector),
            &view.input(Field::Location),
            &view.input(Field::Bio),
        );

        view.show(vec![Card::Loading]);

        let result = self.endpoint.recommend(request).await;
        view.show(render::cards(&result));
    }
}

/// Resets the four input fields and clears the results area
pub fn clear_form(view: &mut dyn FormView) {
    for field in Field::ALL {
        view.set_input(field, "");
    }
    view.show(Vec::new());
}
