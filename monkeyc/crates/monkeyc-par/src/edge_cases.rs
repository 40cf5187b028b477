//! Edge case tests for monkeyc-par
