/// The digit type of a magnitude: values are stored in base `2^WORD_BITS`.
pub type Word = u64;
/// Holds the full product of two words.
pub type DoubleWord = u128;

pub const WORD_BITS: usize = Word::BITS as usize;

/// Operands with at least this many words on both sides are multiplied with
/// the Karatsuba split, smaller ones with the schoolbook loop.
pub const KARATSUBA_THRESHOLD: usize = 40;

pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'a' , 'b' ,
    'c' , 'd' , 'e' , 'f' , 'g' , 'h' ,
    'i' , 'j' , 'k' , 'l' , 'm' , 'n' ,
    'o' , 'p' , 'q' , 'r' , 's' , 't' ,
    'u' , 'v' , 'w' , 'x' , 'y' , 'z'
];

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

/// Odd primes used for trial division before any Miller-Rabin round.
pub const SMALL_PRIMES: [Word; 12] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Witness bases. Below `PSEUDO_PRIMES[k]` the first `k + 1` bases decide primality exactly,
/// above the last bound all thirteen are used and a composite slips through with
/// probability at most `4^-13`.
pub const WITNESS_BASES: [Word; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Smallest strong pseudoprimes to the first `k + 1` witness bases.
pub const PSEUDO_PRIMES: [u128; 13] = [
    2_047,
    1_373_653,
    25_326_001,
    3_215_031_751,
    2_152_302_898_747,
    3_474_749_660_383,
    341_550_071_728_321,
    341_550_071_728_321,
    3_825_123_056_546_413_051,
    3_825_123_056_546_413_051,
    3_825_123_056_546_413_051,
    318_665_857_834_031_151_167_461,
    3_317_044_064_679_887_385_961_981,
];
