//! Stock-mutation rules applied when an operation is validated.

use common::LocationId;
use tracing::warn;

use crate::{Location, Operation, OperationStatus, Product};

/// The four source/destination pairings a stock move can take.
///
/// Stock only exists at internal locations, so the internal/external pairing
/// of the endpoints alone decides how quantity-on-hand and the product's
/// location change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// External source, internal destination: goods appear at the
    /// destination.
    Inbound,

    /// Internal source, external destination: goods leave; the destination is
    /// not tracked.
    Outbound,

    /// Internal on both ends: pure relocation, stock unchanged.
    Relocation,

    /// External on both ends: not a physically meaningful transfer.
    External,
}

impl MoveKind {
    /// Classifies a move from the internal/external status of its endpoints.
    pub fn classify(source_internal: bool, dest_internal: bool) -> Self {
        match (source_internal, dest_internal) {
            (false, true) => MoveKind::Inbound,
            (true, false) => MoveKind::Outbound,
            (true, true) => MoveKind::Relocation,
            (false, false) => MoveKind::External,
        }
    }
}

/// Whether a location id refers to an internal location.
///
/// Unknown ids classify as external: stock never moves into or out of a
/// location the registry does not know about.
fn is_internal(locations: &[Location], id: &LocationId) -> bool {
    locations
        .iter()
        .find(|location| &location.id == id)
        .is_some_and(|location| location.kind.is_internal())
}

/// Applies a validated operation to the product registry.
///
/// Returns the updated products and the operation's new status (Done).
/// Validating an operation that is already Done returns the inputs unchanged,
/// so re-validation is idempotent rather than an error.
///
/// Each line resolves its product by id; lines referencing unknown products
/// are skipped with a warning and do not affect the other lines. Lines apply
/// in sequence against the same working copy, so a product touched by several
/// lines accumulates every effect. Stock is never clamped and no availability
/// check is performed: outbound moves may drive stock negative.
pub fn validate(
    operation: &Operation,
    products: &[Product],
    locations: &[Location],
) -> (Vec<Product>, OperationStatus) {
    if operation.status == OperationStatus::Done {
        return (products.to_vec(), OperationStatus::Done);
    }

    let move_kind = MoveKind::classify(
        is_internal(locations, &operation.source_location_id),
        is_internal(locations, &operation.dest_location_id),
    );

    let mut updated = products.to_vec();
    for line in &operation.lines {
        let Some(product) = updated.iter_mut().find(|p| p.id == line.product_id) else {
            warn!(
                operation = %operation.id,
                product = %line.product_id,
                "operation line references an unknown product, skipping"
            );
            continue;
        };

        match move_kind {
            MoveKind::Inbound => {
                product.stock += line.quantity;
                product.location_id = operation.dest_location_id.clone();
            }
            MoveKind::Outbound => {
                product.stock -= line.quantity;
            }
            MoveKind::Relocation => {
                product.location_id = operation.dest_location_id.clone();
            }
            MoveKind::External => {}
        }
    }

    (updated, OperationStatus::Done)
}
