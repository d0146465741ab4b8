#[cfg(test)]
mod common;

#[cfg(test)]
mod gate_scenario_tests;

#[cfg(test)]
mod gate_property_tests;

#[cfg(test)]
mod session_store_tests;
