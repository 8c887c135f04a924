// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

#![deny(clippy::all, clippy::pedantic)]

use std::ffi::OsString;

fn main() -> Result<(), String> {
    grover_runner::main(None::<Vec<OsString>>)
}
