// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashcalc
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2026 Volker Schwaberow

use hashcalc::hc::app;

fn main() {
	std::process::exit(app::run());
}
