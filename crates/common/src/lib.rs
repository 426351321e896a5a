//! Cross-crate helpers shared by the server binary and its libraries.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn envelope_wraps_payload() {
        let body = types::DataResponse::new(vec![1, 2, 3]);
        assert_eq!(body.data.len(), 3);
    }
}
