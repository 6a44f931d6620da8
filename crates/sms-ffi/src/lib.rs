//! UniFFI bindings crate for the sms library
//!
//! This crate wraps the sms crate for UniFFI library mode binding
//! generation. It re-exports the FFI module and UniFFI scaffolding from the
//! sms crate.
//!
//! ## Building for Swift
//!
//! 1. Build the library for Apple platforms:
//!    ```bash
//!    cargo build --release -p sms-ffi --target aarch64-apple-darwin
//!    cargo build --release -p sms-ffi --target aarch64-apple-ios
//!    ```
//!
//! 2. Generate Swift bindings:
//!    ```bash
//!    cargo run -p sms-ffi --features bindgen --bin uniffi-bindgen generate \
//!        --library target/aarch64-apple-darwin/release/libsms_ffi.dylib \
//!        --language swift \
//!        --out-dir generated/swift
//!    ```

// Re-export everything from the sms crate's FFI module
pub use sms::ffi::*;

// Re-export the uniffi scaffolding from the sms crate
// This is needed for library mode to work correctly
sms::uniffi_reexport_scaffolding!();
