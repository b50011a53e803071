use super::{Generator, RngCore, SeedValue};
use rand::Rng;

/// Generates UUID v4 strings (random, formatted as 8-4-4-4-12 hex).
pub struct UuidGen;

impl Generator for UuidGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        // Set version 4
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        // Set variant 1
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        let s = format!(
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            bytes[0],
            bytes[1],
            bytes[2],
            bytes[3],
            bytes[4],
            bytes[5],
            bytes[6],
            bytes[7],
            bytes[8],
            bytes[9],
            bytes[10],
            bytes[11],
            bytes[12],
            bytes[13],
            bytes[14],
            bytes[15],
        );
        SeedValue::Text(s)
    }
    fn name(&self) -> &'static str {
        "Uuid"
    }
}

/// Generates simple JSON objects with random key-value pairs.
pub struct JsonGen;

impl Generator for JsonGen {
    fn generate(&self, rng: &mut dyn RngCore, index: usize, _sql_type: &str) -> SeedValue {
        let num_fields = rng.random_range(1usize..=5);
        let mut fields = Vec::with_capacity(num_fields);
        for i in 0..num_fields {
            let val: i64 = rng.random_range(0..1000);
            fields.push(format!("\"field_{i}\": {val}"));
        }
        // Add an index field for traceability
        fields.push(format!("\"_index\": {index}"));
        SeedValue::Text(format!("{{{}}}", fields.join(", ")))
    }
    fn name(&self) -> &'static str {
        "Json"
    }
}

/// Generates random binary blobs of a given size.
pub struct BlobGen {
    pub size: usize,
}

impl Generator for BlobGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let mut bytes = vec![0u8; self.size];
        rng.fill(&mut bytes[..]);
        SeedValue::Blob(bytes)
    }
    fn name(&self) -> &'static str {
        "Blob"
    }
}

/// Generates PostgreSQL-compatible INET values.
pub struct InetGen;

impl Generator for InetGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let b: u8 = rng.random_range(0..=255);
        let c: u8 = rng.random_range(0..=255);
        let d: u8 = rng.random_range(1..=254);
        SeedValue::Text(format!("10.{b}.{c}.{d}"))
    }
    fn name(&self) -> &'static str {
        "PgInet"
    }
}

/// Generates PostgreSQL-compatible CIDR values.
pub struct CidrGen;

impl Generator for CidrGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let b: u8 = rng.random_range(0..=255);
        let c: u8 = rng.random_range(0..=255);
        SeedValue::Text(format!("10.{b}.{c}.0/24"))
    }
    fn name(&self) -> &'static str {
        "PgCidr"
    }
}

/// Generates PostgreSQL-compatible MACADDR values.
pub struct MacAddrGen;

impl Generator for MacAddrGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let mut bytes = [0u8; 6];
        rng.fill(&mut bytes);
        SeedValue::Text(format!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        ))
    }
    fn name(&self) -> &'static str {
        "PgMacAddr"
    }
}

/// Generates PostgreSQL-compatible MACADDR8 values.
pub struct MacAddr8Gen;

impl Generator for MacAddr8Gen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let mut bytes = [0u8; 8];
        rng.fill(&mut bytes);
        SeedValue::Text(format!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]
        ))
    }
    fn name(&self) -> &'static str {
        "PgMacAddr8"
    }
}

/// Generates PostgreSQL-compatible POINT values.
pub struct PointGen;

impl Generator for PointGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let x: i16 = rng.random_range(-1000..=1000);
        let y: i16 = rng.random_range(-1000..=1000);
        SeedValue::Text(format!("({x},{y})"))
    }
    fn name(&self) -> &'static str {
        "PgPoint"
    }
}

/// Generates PostgreSQL-compatible LINE values.
pub struct LineGen;

impl Generator for LineGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let x1: i16 = rng.random_range(-1000..=1000);
        let y1: i16 = rng.random_range(-1000..=1000);
        let x2: i16 = x1 + rng.random_range(1..=25);
        let y2: i16 = y1 + rng.random_range(1..=25);
        SeedValue::Text(format!("[({x1},{y1}),({x2},{y2})]"))
    }
    fn name(&self) -> &'static str {
        "PgLine"
    }
}

/// Generates PostgreSQL-compatible LSEG values.
pub struct LsegGen;

impl Generator for LsegGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let x1: i16 = rng.random_range(-1000..=1000);
        let y1: i16 = rng.random_range(-1000..=1000);
        let x2: i16 = x1 + rng.random_range(1..=25);
        let y2: i16 = y1 + rng.random_range(1..=25);
        SeedValue::Text(format!("[({x1},{y1}),({x2},{y2})]"))
    }
    fn name(&self) -> &'static str {
        "PgLseg"
    }
}

/// Generates PostgreSQL-compatible BOX values.
pub struct BoxGen;

impl Generator for BoxGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let x1: i16 = rng.random_range(-1000..=950);
        let y1: i16 = rng.random_range(-1000..=950);
        let x2: i16 = x1 + rng.random_range(1..=50);
        let y2: i16 = y1 + rng.random_range(1..=50);
        SeedValue::Text(format!("(({x1},{y1}),({x2},{y2}))"))
    }
    fn name(&self) -> &'static str {
        "PgBox"
    }
}

/// Generates PostgreSQL-compatible PATH values.
pub struct PathGen;

impl Generator for PathGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let x: i16 = rng.random_range(-100..=100);
        let y: i16 = rng.random_range(-100..=100);
        SeedValue::Text(
            format!(
                "[({x},{y}),({},{}) ,({},{}),({},{})]",
                x + 10,
                y + 5,
                x + 20,
                y,
                x + 30,
                y + 15
            )
            .replace(" ,", ","),
        )
    }
    fn name(&self) -> &'static str {
        "PgPath"
    }
}

/// Generates PostgreSQL-compatible POLYGON values.
pub struct PolygonGen;

impl Generator for PolygonGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let x: i16 = rng.random_range(-100..=100);
        let y: i16 = rng.random_range(-100..=100);
        SeedValue::Text(
            format!(
                "(({x},{y}),({},{}) ,({},{}),({},{}) )",
                x + 10,
                y,
                x + 10,
                y + 10,
                x,
                y + 10
            )
            .replace(" ,", ",")
            .replace(") ", ")"),
        )
    }
    fn name(&self) -> &'static str {
        "PgPolygon"
    }
}

/// Generates PostgreSQL-compatible CIRCLE values.
pub struct CircleGen;

impl Generator for CircleGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let x: i16 = rng.random_range(-1000..=1000);
        let y: i16 = rng.random_range(-1000..=1000);
        let r: u8 = rng.random_range(1..=25);
        SeedValue::Text(format!("<({x},{y}),{r}>"))
    }
    fn name(&self) -> &'static str {
        "PgCircle"
    }
}

/// Generates PostgreSQL-compatible BIT and VARBIT values.
pub struct BitGen {
    pub min_len: usize,
    pub max_len: usize,
}

impl Generator for BitGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        let len = rng.random_range(self.min_len..=self.max_len);
        let bits: String = (0..len)
            .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
            .collect();
        SeedValue::Text(bits)
    }
    fn name(&self) -> &'static str {
        "PgBit"
    }
}

/// Generates an empty PostgreSQL array literal.
pub struct ArrayGen;

impl Generator for ArrayGen {
    fn generate(&self, _rng: &mut dyn RngCore, _index: usize, _sql_type: &str) -> SeedValue {
        SeedValue::Text("{}".to_string())
    }
    fn name(&self) -> &'static str {
        "PgArray"
    }
}
