use advent_core::{AocParser, AocSolver, ParseError, PartSolver, Puzzle, SolveError};
use thiserror::Error;

#[derive(AocSolver, Puzzle)]
#[aoc_solver(parts = 2)]
#[puzzle(year = 2021, day = 16, title = "Packet Decoder", tags = ["bits", "recursion"])]
pub struct PacketDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Product,
    Minimum,
    Maximum,
    GreaterThan,
    LessThan,
    EqualTo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Literal(u64),
    Operator(Operator, Vec<Packet>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    version: u8,
    payload: Payload,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("'{0}' is not a hex digit")]
    NotHex(char),
    #[error("transmission ended at bit {0} in the middle of a packet")]
    Truncated(usize),
    #[error("literal at bit {0} does not fit in 64 bits")]
    LiteralOverflow(usize),
    #[error("comparison at bit {0} needs exactly two sub-packets, got {1}")]
    ComparisonArity(usize, usize),
    #[error("operator at bit {0} has no sub-packets")]
    EmptyOperator(usize),
    #[error("packet at bit {0} is nested too deeply")]
    TooDeep(usize),
}

/// Deepest operator nesting accepted from a transmission
const MAX_DEPTH: usize = 64;

impl From<DecodeError> for ParseError {
    fn from(err: DecodeError) -> Self {
        ParseError::InvalidFormat(err.to_string())
    }
}

/// Big-endian bit cursor over a decoded transmission
struct Bits {
    bits: Vec<bool>,
    pos: usize,
}

impl Bits {
    fn from_hex(hex: &str) -> Result<Self, DecodeError> {
        let mut bits = Vec::with_capacity(hex.len() * 4);
        for c in hex.chars() {
            let nibble = c.to_digit(16).ok_or(DecodeError::NotHex(c))?;
            bits.extend((0..4).rev().map(|i| nibble >> i & 1 == 1));
        }
        Ok(Self { bits, pos: 0 })
    }

    fn take(&mut self, n: usize) -> Result<u64, DecodeError> {
        let end = self.pos + n;
        let chunk = self.bits.get(self.pos..end).ok_or(DecodeError::Truncated(self.pos))?;
        self.pos = end;
        Ok(chunk.iter().fold(0, |acc, &bit| acc << 1 | u64::from(bit)))
    }

    fn packet(&mut self, depth: usize) -> Result<Packet, DecodeError> {
        let start = self.pos;
        if depth > MAX_DEPTH {
            return Err(DecodeError::TooDeep(start));
        }
        let version = self.take(3)? as u8;
        let type_id = self.take(3)?;

        let operator = match type_id {
            0 => Operator::Sum,
            1 => Operator::Product,
            2 => Operator::Minimum,
            3 => Operator::Maximum,
            4 => {
                return Ok(Packet {
                    version,
                    payload: Payload::Literal(self.literal(start)?),
                });
            }
            5 => Operator::GreaterThan,
            6 => Operator::LessThan,
            _ => Operator::EqualTo,
        };

        let mut children = Vec::new();
        if self.take(1)? == 0 {
            let length = self.take(15)? as usize;
            let end = self.pos + length;
            while self.pos < end {
                children.push(self.packet(depth + 1)?);
            }
            if self.pos != end {
                return Err(DecodeError::Truncated(end));
            }
        } else {
            let count = self.take(11)?;
            for _ in 0..count {
                children.push(self.packet(depth + 1)?);
            }
        }

        match operator {
            Operator::GreaterThan | Operator::LessThan | Operator::EqualTo
                if children.len() != 2 =>
            {
                Err(DecodeError::ComparisonArity(start, children.len()))
            }
            _ if children.is_empty() => Err(DecodeError::EmptyOperator(start)),
            _ => Ok(Packet {
                version,
                payload: Payload::Operator(operator, children),
            }),
        }
    }

    fn literal(&mut self, start: usize) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        loop {
            let group = self.take(5)?;
            if value.leading_zeros() < 4 {
                return Err(DecodeError::LiteralOverflow(start));
            }
            value = value << 4 | (group & 0xF);
            if group & 0x10 == 0 {
                return Ok(value);
            }
        }
    }
}

impl Packet {
    fn version_sum(&self) -> u64 {
        let nested = match &self.payload {
            Payload::Literal(_) => 0,
            Payload::Operator(_, children) => children.iter().map(Packet::version_sum).sum(),
        };
        u64::from(self.version) + nested
    }

    fn evaluate(&self) -> Result<u64, SolveError> {
        let (op, children) = match &self.payload {
            Payload::Literal(value) => return Ok(*value),
            Payload::Operator(op, children) => (*op, children),
        };
        let values = children
            .iter()
            .map(Packet::evaluate)
            .collect::<Result<Vec<_>, _>>()?;
        let overflow = || SolveError::NoSolution("packet value overflows 64 bits".to_string());
        match (op, values.as_slice()) {
            (Operator::Sum, _) => values
                .iter()
                .try_fold(0u64, |acc, v| acc.checked_add(*v))
                .ok_or_else(overflow),
            (Operator::Product, _) => values
                .iter()
                .try_fold(1u64, |acc, v| acc.checked_mul(*v))
                .ok_or_else(overflow),
            (Operator::Minimum, _) => Ok(values.iter().copied().min().unwrap_or_default()),
            (Operator::Maximum, _) => Ok(values.iter().copied().max().unwrap_or_default()),
            (Operator::GreaterThan, [a, b]) => Ok(u64::from(a > b)),
            (Operator::LessThan, [a, b]) => Ok(u64::from(a < b)),
            (Operator::EqualTo, [a, b]) => Ok(u64::from(a == b)),
            (_, other) => Err(SolveError::NoSolution(format!(
                "comparison with {} operands",
                other.len()
            ))),
        }
    }
}

impl AocParser for PacketDecoder {
    type SharedData<'a> = Packet;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let hex = input.trim();
        if hex.is_empty() {
            return Err(ParseError::MissingData("empty transmission".to_string()));
        }
        // Trailing zero bits pad the outermost packet to a hex digit boundary.
        Ok(Bits::from_hex(hex)?.packet(0)?)
    }
}

impl PartSolver<1> for PacketDecoder {
    fn solve(packet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(packet.version_sum().to_string())
    }
}

impl PartSolver<2> for PacketDecoder {
    fn solve(packet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(packet.evaluate()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::Solver;

    fn solve(input: &str, part: u8) -> String {
        let mut packet = PacketDecoder::parse(input).unwrap();
        PacketDecoder::solve_part(&mut packet, part).unwrap()
    }

    #[test]
    fn literal_packet() {
        let packet = PacketDecoder::parse("D2FE28").unwrap();
        assert_eq!(
            packet,
            Packet {
                version: 6,
                payload: Payload::Literal(2021)
            }
        );
    }

    #[test]
    fn operator_length_types() {
        // Bit-length form with literals 10 and 20
        let packet = PacketDecoder::parse("38006F45291200").unwrap();
        let Payload::Operator(Operator::LessThan, children) = &packet.payload else {
            panic!("expected a less-than operator, got {packet:?}");
        };
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].payload, Payload::Literal(20));

        // Sub-packet-count form with literals 1, 2 and 3
        let packet = PacketDecoder::parse("EE00D40C823060").unwrap();
        assert_eq!(packet.version, 7);
        assert!(matches!(&packet.payload, Payload::Operator(Operator::Maximum, c) if c.len() == 3));
    }

    #[test]
    fn version_sums() {
        assert_eq!(solve("8A004A801A8002F478", 1), "16");
        assert_eq!(solve("620080001611562C8802118E34", 1), "12");
        assert_eq!(solve("C0015000016115A2E0802F182340", 1), "23");
        assert_eq!(solve("A0016C880162017C3686B18A3D4780", 1), "31");
    }

    #[test]
    fn evaluation() {
        assert_eq!(solve("C200B40A82", 2), "3");
        assert_eq!(solve("04005AC33890", 2), "54");
        assert_eq!(solve("880086C3E88112", 2), "7");
        assert_eq!(solve("CE00C43D881120", 2), "9");
        assert_eq!(solve("D8005AC2A8F0", 2), "1");
        assert_eq!(solve("F600BC2D8F", 2), "0");
        assert_eq!(solve("9C005AC2F8F0", 2), "0");
        assert_eq!(solve("9C0141080250320F1802104A08", 2), "1");
    }

    #[test]
    fn malformed_transmissions() {
        assert_eq!(
            PacketDecoder::parse("D2FG28").unwrap_err(),
            ParseError::InvalidFormat("'G' is not a hex digit".to_string())
        );
        assert!(matches!(PacketDecoder::parse("D2"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(PacketDecoder::parse(""), Err(ParseError::MissingData(_))));
    }

    /// Hex for `levels` nested single-child sums around the literal 1.
    fn nested_sums(levels: usize) -> String {
        let mut bits = "000000100000000001".repeat(levels);
        bits.push_str("00010000001");
        while bits.len() % 4 != 0 {
            bits.push('0');
        }
        bits.as_bytes()
            .chunks(4)
            .map(|nibble| {
                let value = nibble.iter().fold(0, |acc, &b| acc << 1 | u32::from(b == b'1'));
                char::from_digit(value, 16).unwrap().to_ascii_uppercase()
            })
            .collect()
    }

    #[test]
    fn nesting_depth_is_bounded() {
        assert_eq!(solve(&nested_sums(MAX_DEPTH), 2), "1");
        assert_eq!(
            PacketDecoder::parse(&nested_sums(MAX_DEPTH + 1)),
            Err(ParseError::InvalidFormat(DecodeError::TooDeep((MAX_DEPTH + 1) * 18).to_string()))
        );
    }
}
