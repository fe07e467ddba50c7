//! Workspace-level integration tests for unitconv live in `tests/`.
