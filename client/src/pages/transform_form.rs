//! Form model and request assembly for the transform-products page.
//!
//! DESIGN
//! ======
//! Rows are keyed by [`RowId`]s handed out by the form, never by position,
//! so removing or reordering rows cannot retarget an edit. The model allows
//! any number of rows; submit-time validation is the single source of truth
//! for "at least one input" and "at least one product".

#[cfg(test)]
#[path = "transform_form_test.rs"]
mod transform_form_test;

use time::OffsetDateTime;

use crate::net::api::TraceApi;
use crate::net::types::{InputConsumption, NewProduct, ProcessingRecord, TransformRequest, UnitOfMeasure};
use crate::state::toast::{Notice, ToastVariant};
use crate::util::ids::synthesize_shipment_id;
use crate::util::timestamp::{normalize_expiry, normalize_processed_at};

pub const PROCESSING_LOCATION: &str = "Transformation Plant";

/// Stable identity of a form row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputRow {
    pub id: RowId,
    pub shipment_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRow {
    pub id: RowId,
    pub new_shipment_id: String,
    pub product_name: String,
    pub description: String,
    pub quantity: String,
    pub unit_of_measure: UnitOfMeasure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductField {
    NewShipmentId,
    ProductName,
    Description,
    Quantity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessingField {
    ProcessingType,
    ProcessingLineId,
    DateProcessed,
    OutputBatchId,
    ExpiryDate,
    DestinationDistributorId,
}

/// Raw processing inputs as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessingForm {
    pub processing_type: String,
    pub processing_line_id: String,
    /// `datetime-local` value; blank means "now".
    pub date_processed: String,
    pub output_batch_id: String,
    /// `date` value (`YYYY-MM-DD`); blank means no expiry.
    pub expiry_date: String,
    pub destination_distributor_id: String,
}

impl ProcessingForm {
    pub fn value(&self, field: ProcessingField) -> &str {
        match field {
            ProcessingField::ProcessingType => &self.processing_type,
            ProcessingField::ProcessingLineId => &self.processing_line_id,
            ProcessingField::DateProcessed => &self.date_processed,
            ProcessingField::OutputBatchId => &self.output_batch_id,
            ProcessingField::ExpiryDate => &self.expiry_date,
            ProcessingField::DestinationDistributorId => &self.destination_distributor_id,
        }
    }

    fn field_mut(&mut self, field: ProcessingField) -> &mut String {
        match field {
            ProcessingField::ProcessingType => &mut self.processing_type,
            ProcessingField::ProcessingLineId => &mut self.processing_line_id,
            ProcessingField::DateProcessed => &mut self.date_processed,
            ProcessingField::OutputBatchId => &mut self.output_batch_id,
            ProcessingField::ExpiryDate => &mut self.expiry_date,
            ProcessingField::DestinationDistributorId => &mut self.destination_distributor_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("Select input shipments")]
    NoInputs,
    #[error("Add at least one product")]
    NoProducts,
    #[error("Invalid quantity for {product}: {raw}")]
    InvalidQuantity { product: String, raw: String },
    #[error("Invalid processed date: {0}")]
    InvalidProcessedDate(String),
    #[error("Invalid expiry date: {0}")]
    InvalidExpiryDate(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformForm {
    next_row: u64,
    pub inputs: Vec<InputRow>,
    pub products: Vec<ProductRow>,
    pub processing: ProcessingForm,
}

impl Default for TransformForm {
    /// One empty input row and one empty product row.
    fn default() -> Self {
        let mut form = Self { next_row: 0, inputs: Vec::new(), products: Vec::new(), processing: ProcessingForm::default() };
        form.add_input();
        form.add_product();
        form
    }
}

impl TransformForm {
    fn next_id(&mut self) -> RowId {
        self.next_row += 1;
        RowId(self.next_row)
    }

    pub fn add_input(&mut self) -> RowId {
        let id = self.next_id();
        self.inputs.push(InputRow { id, shipment_id: String::new() });
        id
    }

    /// Remove an input row. Returns false when no such row exists.
    pub fn remove_input(&mut self, id: RowId) -> bool {
        let before = self.inputs.len();
        self.inputs.retain(|r| r.id != id);
        self.inputs.len() != before
    }

    pub fn set_input(&mut self, id: RowId, shipment_id: impl Into<String>) {
        if let Some(row) = self.inputs.iter_mut().find(|r| r.id == id) {
            row.shipment_id = shipment_id.into();
        }
    }

    pub fn input_value(&self, id: RowId) -> Option<&str> {
        self.inputs.iter().find(|r| r.id == id).map(|r| r.shipment_id.as_str())
    }

    pub fn add_product(&mut self) -> RowId {
        let id = self.next_id();
        self.products.push(ProductRow {
            id,
            new_shipment_id: String::new(),
            product_name: String::new(),
            description: String::new(),
            quantity: String::new(),
            unit_of_measure: UnitOfMeasure::default(),
        });
        id
    }

    pub fn remove_product(&mut self, id: RowId) -> bool {
        let before = self.products.len();
        self.products.retain(|r| r.id != id);
        self.products.len() != before
    }

    pub fn set_product_field(&mut self, id: RowId, field: ProductField, value: impl Into<String>) {
        let Some(row) = self.products.iter_mut().find(|r| r.id == id) else {
            return;
        };
        let slot = match field {
            ProductField::NewShipmentId => &mut row.new_shipment_id,
            ProductField::ProductName => &mut row.product_name,
            ProductField::Description => &mut row.description,
            ProductField::Quantity => &mut row.quantity,
        };
        *slot = value.into();
    }

    pub fn product_value(&self, id: RowId, field: ProductField) -> Option<&str> {
        let row = self.products.iter().find(|r| r.id == id)?;
        Some(match field {
            ProductField::NewShipmentId => &row.new_shipment_id,
            ProductField::ProductName => &row.product_name,
            ProductField::Description => &row.description,
            ProductField::Quantity => &row.quantity,
        })
    }

    pub fn product_unit(&self, id: RowId) -> Option<UnitOfMeasure> {
        self.products.iter().find(|r| r.id == id).map(|r| r.unit_of_measure)
    }

    pub fn set_product_unit(&mut self, id: RowId, unit: UnitOfMeasure) {
        if let Some(row) = self.products.iter_mut().find(|r| r.id == id) {
            row.unit_of_measure = unit;
        }
    }

    pub fn set_processing(&mut self, field: ProcessingField, value: impl Into<String>) {
        *self.processing.field_mut(field) = value.into();
    }

    /// Remove buttons are offered only while more than one row exists.
    pub fn can_remove_inputs(&self) -> bool {
        self.inputs.len() > 1
    }

    pub fn can_remove_products(&self) -> bool {
        self.products.len() > 1
    }

    /// Non-empty selected input ids, in row order.
    pub fn selected_inputs(&self) -> Vec<String> {
        self.inputs
            .iter()
            .map(|r| r.shipment_id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Product rows with both a name and a quantity.
    pub fn qualifying_products(&self) -> Vec<&ProductRow> {
        self.products
            .iter()
            .filter(|p| !p.product_name.trim().is_empty() && !p.quantity.trim().is_empty())
            .collect()
    }

    /// Check the two submit preconditions without building anything.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.selected_inputs().is_empty() {
            return Err(TransformError::NoInputs);
        }
        if self.qualifying_products().is_empty() {
            return Err(TransformError::NoProducts);
        }
        Ok(())
    }

    /// Assemble the transformation request.
    ///
    /// `new_id` supplies identifiers for product rows left blank.
    pub fn build_request(
        &self,
        now: OffsetDateTime,
        mut new_id: impl FnMut(OffsetDateTime) -> String,
    ) -> Result<TransformRequest, TransformError> {
        self.validate()?;

        let input_consumption =
            self.selected_inputs().into_iter().map(|shipment_id| InputConsumption { shipment_id }).collect();

        let new_products = self
            .qualifying_products()
            .into_iter()
            .map(|row| {
                let quantity = parse_quantity(&row.quantity).ok_or_else(|| TransformError::InvalidQuantity {
                    product: row.product_name.trim().to_owned(),
                    raw: row.quantity.trim().to_owned(),
                })?;
                let supplied = row.new_shipment_id.trim();
                Ok(NewProduct {
                    new_shipment_id: if supplied.is_empty() { new_id(now) } else { supplied.to_owned() },
                    product_name: row.product_name.trim().to_owned(),
                    description: row.description.trim().to_owned(),
                    quantity,
                    unit_of_measure: row.unit_of_measure,
                })
            })
            .collect::<Result<Vec<_>, TransformError>>()?;

        let p = &self.processing;
        let date_processed = normalize_processed_at(&p.date_processed, now)
            .ok_or_else(|| TransformError::InvalidProcessedDate(p.date_processed.trim().to_owned()))?;
        let expiry_date = normalize_expiry(&p.expiry_date)
            .ok_or_else(|| TransformError::InvalidExpiryDate(p.expiry_date.trim().to_owned()))?;

        Ok(TransformRequest {
            input_consumption,
            new_products,
            processing_record: ProcessingRecord {
                processing_type: p.processing_type.trim().to_owned(),
                processing_line_id: p.processing_line_id.trim().to_owned(),
                date_processed,
                output_batch_id: p.output_batch_id.trim().to_owned(),
                expiry_date,
                processing_location: PROCESSING_LOCATION.to_owned(),
                quality_certifications: Vec::new(),
                destination_distributor_id: p.destination_distributor_id.trim().to_owned(),
            },
        })
    }
}

/// Parse a numeric quantity; non-finite values are rejected.
fn parse_quantity(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|q| q.is_finite())
}

/// Validate, assemble and submit the form.
///
/// `Ok` carries the success toast (the caller navigates to the dashboard);
/// `Err` carries the failure toast. Validation failures issue no request.
pub async fn submit_transform(api: &dyn TraceApi, form: &TransformForm, now: OffsetDateTime) -> Result<Notice, Notice> {
    let request = form
        .build_request(now, synthesize_shipment_id)
        .map_err(|err| Notice::title_only(err.to_string(), ToastVariant::Destructive))?;
    log::debug!(
        "submitting transformation: {} inputs -> {} products",
        request.input_consumption.len(),
        request.new_products.len()
    );
    match api.transform_products(&request).await {
        Ok(_) => Ok(Notice::title_only("Transformation complete", ToastVariant::Success)),
        Err(err) => {
            let message = err.user_message();
            let message = if message.trim().is_empty() { "Failed".to_owned() } else { message };
            Err(Notice::error("Error", Some(message)))
        }
    }
}
