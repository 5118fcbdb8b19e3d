mod import_synthesizer_tests;
mod requiredness_policy_tests;
