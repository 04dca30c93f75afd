// ============================================================================
// Field Registry
// Process-wide singleton cache of tuple field handles
// ============================================================================

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use super::traits::RealFieldElement;
use super::tuple::TupleField;

/// One entry per (scalar type, dimension) pair, alive for the process.
type FieldKey = (TypeId, usize);

static FIELDS: LazyLock<RwLock<HashMap<FieldKey, Arc<dyn Any + Send + Sync>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Get the singleton field handle for tuples over the scalar type of
/// `sample` with the given dimension.
///
/// The read path takes the shared lock; a miss re-checks under the
/// exclusive lock before inserting, so concurrent first-time lookups for
/// the same key always observe a single instance.
pub(crate) fn tuple_field_of<T: RealFieldElement>(
    sample: &T,
    dimension: usize,
) -> Arc<TupleField<T>> {
    let key = (TypeId::of::<T>(), dimension);
    if let Some(entry) = FIELDS.read().get(&key) {
        return Arc::clone(entry)
            .downcast::<TupleField<T>>()
            .expect("registry entry matches its key type");
    }
    let mut fields = FIELDS.write();
    let entry = fields.entry(key).or_insert_with(|| {
        tracing::debug!(dimension, "creating tuple field handle");
        Arc::new(TupleField::<T>::new(sample.field(), dimension))
    });
    Arc::clone(entry)
        .downcast::<TupleField<T>>()
        .expect("registry entry matches its key type")
}
