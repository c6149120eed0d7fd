use chrono::NaiveDate;
use fractic_server_error::define_client_error;
use rust_decimal::Decimal;

// IO-related.
define_client_error!(ReadError, "Error reading rules file.");

// Parsing-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidDecimal, "Invalid decimal number: '{value}'.", { value: &str });

// Rule-configuration-related. All of these are raised while loading the
// rule list, before any entry is processed.
define_client_error!(EmptyRuleList, "Sharing rule list must not be empty.");
define_client_error!(
    InvalidRuleFraction,
    "Sharing rule tagged '{tag}' has fraction {fraction}, expected a value within [0, 1].",
    { tag: &str, fraction: &Decimal }
);
define_client_error!(
    InvalidQuantizeStep,
    "Sharing rule tagged '{tag}' has quantize step {quantize}, expected a positive value.",
    { tag: &str, quantize: &Decimal }
);
define_client_error!(
    InvalidValidityRange,
    "Sharing rule tagged '{tag}' has an empty validity interval: [{start}, {end}).",
    { tag: &str, start: &NaiveDate, end: &NaiveDate }
);

// Rewriting-related.
define_client_error!(
    MalformedAccountName,
    "Account rewrite produced malformed account name: '{name}'.",
    { name: &str }
);
