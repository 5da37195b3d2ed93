/**
 * This module contains all logic for importing external data into
 * stage-ready structures.
 */
pub mod pixels;
