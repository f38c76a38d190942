use application::transfer::{AddCartItemDto, RemoveCartItemDto, UpdateCartQuantityDto};
use error_stack::Report;
use kernel::prelude::entity::{Book, Quantity};
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

use crate::controller::{Intake, TryIntake};

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    book: Book,
    #[serde(default)]
    quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartQuantityRequest {
    quantity: i64,
}

#[derive(Debug)]
pub struct RemoveCartItemRequest {
    line_id: Uuid,
}

impl RemoveCartItemRequest {
    pub fn new(line_id: Uuid) -> Self {
        Self { line_id }
    }
}

pub struct CartTransformer;

impl TryIntake<AddCartItemRequest> for CartTransformer {
    type To = AddCartItemDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: AddCartItemRequest) -> Result<Self::To, Self::Error> {
        if input.book.price().as_ref().is_sign_negative() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("book {} has a negative price", input.book.id().as_ref())));
        }
        let quantity = match input.quantity {
            Some(quantity) => Quantity::parse(quantity)?,
            None => Quantity::one(),
        };
        Ok(AddCartItemDto {
            book: input.book,
            quantity,
        })
    }
}

impl TryIntake<(Uuid, UpdateCartQuantityRequest)> for CartTransformer {
    type To = UpdateCartQuantityDto;
    type Error = Report<KernelError>;
    fn emit(
        &self,
        (line_id, input): (Uuid, UpdateCartQuantityRequest),
    ) -> Result<Self::To, Self::Error> {
        Ok(UpdateCartQuantityDto {
            line_id,
            quantity: Quantity::parse(input.quantity)?,
        })
    }
}

impl Intake<RemoveCartItemRequest> for CartTransformer {
    type To = RemoveCartItemDto;
    fn emit(&self, input: RemoveCartItemRequest) -> Self::To {
        RemoveCartItemDto {
            line_id: input.line_id,
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::Quantity;
    use kernel::KernelError;
    use uuid::Uuid;

    use crate::controller::TryIntake;
    use crate::request::{AddCartItemRequest, CartTransformer, UpdateCartQuantityRequest};

    const BOOK: &str = r#"{"id":7,"title":"Rust","author":"Ferris","price":59.8,"cover":"c.png","storeId":1}"#;

    #[test]
    fn quantity_defaults_to_one() {
        let request: AddCartItemRequest =
            serde_json::from_str(&format!(r#"{{"book":{}}}"#, BOOK)).unwrap();
        let dto = CartTransformer.emit(request).unwrap();
        assert_eq!(dto.quantity, Quantity::one());
        assert_eq!(dto.book.id().as_ref(), &7);
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let request: AddCartItemRequest =
            serde_json::from_str(&format!(r#"{{"book":{},"quantity":0}}"#, BOOK)).unwrap();
        let report = CartTransformer.emit(request).unwrap_err();
        assert_eq!(*report.current_context(), KernelError::Validation);

        let request: UpdateCartQuantityRequest =
            serde_json::from_str(r#"{"quantity":-2}"#).unwrap();
        let report = CartTransformer
            .emit((Uuid::new_v4(), request))
            .unwrap_err();
        assert_eq!(*report.current_context(), KernelError::Validation);
    }
}
