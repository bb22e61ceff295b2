use crate::data::{PricePoint, TimeSeries};
use crate::error::Result;

/// Conversion between series and their stored text form
pub trait SeriesCodec: Send + Sync {
    fn encode(&self, series: &[PricePoint]) -> Result<String>;
    fn decode(&self, raw: &str) -> Result<TimeSeries>;
}

/// JSON array of `[timestamp_ms, price]` pairs.
///
/// Relies on serde_json's `float_roundtrip` feature so decoded prices are
/// bit-identical to the encoded ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl SeriesCodec for JsonCodec {
    fn encode(&self, series: &[PricePoint]) -> Result<String> {
        Ok(serde_json::to_string(series)?)
    }

    fn decode(&self, raw: &str) -> Result<TimeSeries> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_layout() {
        let series = vec![PricePoint::new(1000, 0.5), PricePoint::new(2000, 0.52)];
        let encoded = JsonCodec.encode(&series).unwrap();
        assert_eq!(encoded, "[[1000,0.5],[2000,0.52]]");
    }

    #[test]
    fn test_decode_preserves_awkward_floats() {
        let series = vec![
            PricePoint::new(1_717_200_000_000, 0.1 + 0.2),
            PricePoint::new(1_717_286_400_000, 0.523_456_789_012_345_6),
            PricePoint::new(1_717_372_800_000, 1e-9 / 3.0),
        ];
        let decoded = JsonCodec.decode(&JsonCodec.encode(&series).unwrap()).unwrap();
        for (a, b) in series.iter().zip(&decoded) {
            assert_eq!(a.timestamp_ms, b.timestamp_ms);
            assert_eq!(a.price.to_bits(), b.price.to_bits());
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(JsonCodec.decode("{\"prices\": 1}").is_err());
        assert!(JsonCodec.decode("[[1, \"x\"]]").is_err());
    }
}
