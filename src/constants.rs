use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Grams per troy ounce as used by the reference pricing arithmetic.
/// The coarse 31.1 divisor is intentional; do not "fix" it to 31.1035.
pub const GRAMS_PER_TROY_OUNCE: Decimal = dec!(31.1);

/// Composition quantities are expressed in parts-per-thousand of the
/// product weight.
pub const PARTS_PER_THOUSAND: Decimal = dec!(1000);

/// Base currency all metal quotes are expressed in.
pub const BASE_CURRENCY: &str = "USD";

/// Local settlement currency.
pub const LOCAL_CURRENCY: &str = "COP";

/// Country code whose users are quoted in the local currency.
pub const LOCAL_COUNTRY: &str = "COL";

/// How long a calculated price may be trusted before recomputation.
pub const PRICE_VALIDITY_MINUTES: i64 = 30;
