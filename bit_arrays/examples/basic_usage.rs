use bit_arrays::{AnyBitArray, BitArray, BitArrayError, BitList, BitVector};

fn main() {
    println!("=== Bit Array Examples ===\n");

    // Example 1: Attestation-style participation lists
    let _ = example_participation();

    // Example 2: Fixed-size committee flags
    let _ = example_committee();

    // Example 3: Rejecting malformed input
    example_malformed();
}

fn example_participation() -> Result<(), BitArrayError> {
    println!("Example 1: Merging participation lists");

    let mut first = BitList::with_len(10);
    first.set(0, true)?;
    first.set(3, true)?;

    let mut second = BitList::with_len(10);
    second.set(7, true)?;

    println!("  Overlap before merge: {}", first.overlaps(&second)?);
    first.or(&second)?;
    println!("  Participants after merge: {}", first.count_ones());
    println!("  Encoded: {:02x?}", first.serialize());
    println!();

    Ok(())
}

fn example_committee() -> Result<(), BitArrayError> {
    println!("Example 2: Shifting committee flags");

    let mut flags = BitVector::from_bitfield(&[0b0000_0001], 4)?;
    for value in [true, false, true] {
        flags.push(value);
        println!("  After push({value}): {:04b}", flags.as_bytes()[0]);
    }

    let any = AnyBitArray::from(flags);
    println!("  Kind: {:?}, bits set: {}", any.kind(), any.count_ones());
    println!();

    Ok(())
}

fn example_malformed() {
    println!("Example 3: Malformed encodings");

    for bytes in [&[][..], &[0x00u8][..], &[0x05, 0x00][..]] {
        match BitList::deserialize(bytes) {
            Ok(list) => println!("  {bytes:02x?} -> {} bits", list.len()),
            Err(e) => println!("  {bytes:02x?} -> {e}"),
        }
    }

    match BitVector::from_bitfield(&[0x02], 1) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  [02] as 1 bit -> {e}"),
    }
}
