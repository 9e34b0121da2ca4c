/// Document ids are opaque strings assigned by the remote store.
pub type RecordId = String;
