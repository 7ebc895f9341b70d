pub mod receive_callback;
pub mod verify_subscription;
