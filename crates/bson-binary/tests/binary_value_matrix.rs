use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use bson_binary::{BinaryError, BinarySettings, BinarySubtype, BinaryValue, ByteOrderMode};
use rand::Rng;
use uuid::Uuid;

fn hash_of(value: &BinaryValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_uuid() -> Uuid {
    "00112233-4455-6677-8899-aabbccddeeff".parse().unwrap()
}

#[test]
fn constructors_matrix() {
    let value = BinaryValue::new(vec![1u8, 2, 3]);
    assert_eq!(value.bytes(), &[1, 2, 3]);
    assert_eq!(value.subtype(), BinarySubtype::Generic);
    assert_eq!(value.source_byte_order(), ByteOrderMode::Unspecified);
    assert_eq!(value.len(), 3);

    let value = BinaryValue::with_subtype(&b"abc"[..], BinarySubtype::Md5);
    assert_eq!(value.subtype(), BinarySubtype::Md5);
    assert_eq!(value.clone().into_bytes(), b"abc".to_vec());

    let value = BinaryValue::with_byte_order(
        vec![9u8; 4],
        BinarySubtype::Generic,
        ByteOrderMode::JavaHistorical,
    );
    assert_eq!(value.source_byte_order(), ByteOrderMode::JavaHistorical);
    assert_eq!(value.raw_interpretation(), None);
}

#[test]
fn from_uuid_records_mode() {
    for mode in [
        ByteOrderMode::LittleEndian,
        ByteOrderMode::BigEndian,
        ByteOrderMode::JavaHistorical,
    ] {
        let value = BinaryValue::from_uuid(sample_uuid(), mode).unwrap();
        assert_eq!(value.subtype(), BinarySubtype::Uuid);
        assert_eq!(value.len(), 16);
        assert_eq!(value.source_byte_order(), mode);
        assert_eq!(value.to_uuid(), Ok(sample_uuid()));
        assert_eq!(value.raw_interpretation(), Some(sample_uuid()));
    }
    assert_eq!(
        BinaryValue::from_uuid(sample_uuid(), ByteOrderMode::Unspecified),
        Err(BinaryError::UnsupportedConversion)
    );
}

#[test]
fn from_uuid_with_settings_uses_configured_mode() {
    let settings = BinarySettings::from_toml_str("guid_byte_order = \"CSharpLegacy\"").unwrap();
    let value = BinaryValue::from_uuid_with_settings(sample_uuid(), &settings).unwrap();
    assert_eq!(value.source_byte_order(), ByteOrderMode::LittleEndian);
    assert_eq!(value.bytes()[..4], [0x33, 0x22, 0x11, 0x00]);

    let err = BinaryValue::from_uuid_with_settings(sample_uuid(), &BinarySettings::default());
    assert_eq!(err, Err(BinaryError::UnsupportedConversion));
}

#[test]
fn factories_propagate_absence() {
    assert_eq!(BinaryValue::create(None), None);
    assert_eq!(BinaryValue::create_with_subtype(None, BinarySubtype::Uuid), None);
    assert_eq!(
        BinaryValue::create_with_byte_order(None, BinarySubtype::Uuid, ByteOrderMode::BigEndian),
        None
    );

    let empty = BinaryValue::create(Some(Vec::new())).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.subtype(), BinarySubtype::Generic);

    let value = BinaryValue::create_with_byte_order(
        Some(vec![0u8; 16]),
        BinarySubtype::Uuid,
        ByteOrderMode::BigEndian,
    )
    .unwrap();
    assert_eq!(value.to_uuid(), Ok(Uuid::nil()));
}

#[test]
fn try_from_requires_bytes() {
    assert_eq!(BinaryValue::try_from(None::<Vec<u8>>), Err(BinaryError::MissingBytes));
    assert_eq!(
        BinaryValue::try_from(Some(vec![1u8])),
        Ok(BinaryValue::new(vec![1u8]))
    );
}

#[test]
fn to_uuid_failures() {
    let generic = BinaryValue::new(vec![0u8; 16]);
    assert_eq!(
        generic.to_uuid(),
        Err(BinaryError::InvalidSubtype(BinarySubtype::Generic))
    );
    assert_eq!(
        generic.to_uuid_with(ByteOrderMode::BigEndian),
        Err(BinaryError::InvalidSubtype(BinarySubtype::Generic))
    );
    assert_eq!(generic.raw_interpretation(), None);

    let legacy = BinaryValue::with_byte_order(
        vec![0u8; 16],
        BinarySubtype::UuidLegacy,
        ByteOrderMode::BigEndian,
    );
    assert_eq!(
        legacy.to_uuid(),
        Err(BinaryError::InvalidSubtype(BinarySubtype::UuidLegacy))
    );

    let short = BinaryValue::with_byte_order(vec![0u8; 15], BinarySubtype::Uuid, ByteOrderMode::BigEndian);
    assert_eq!(short.to_uuid(), Err(BinaryError::InvalidLength(15)));
    assert_eq!(short.raw_interpretation(), None);
}

#[test]
fn to_uuid_with_reinterprets() {
    let value = BinaryValue::from_uuid(sample_uuid(), ByteOrderMode::LittleEndian).unwrap();
    assert_eq!(value.to_uuid_with(ByteOrderMode::LittleEndian), Ok(sample_uuid()));
    let reread = value.to_uuid_with(ByteOrderMode::BigEndian).unwrap();
    assert_eq!(reread.to_string(), "33221100-5544-7766-8899-aabbccddeeff");
    assert_eq!(
        value.to_uuid_with(ByteOrderMode::Unspecified),
        Err(BinaryError::UnsupportedConversion)
    );
    // The recorded mode is not changed by reinterpretation.
    assert_eq!(value.to_uuid(), Ok(sample_uuid()));
}

#[test]
fn equality_ignores_byte_order() {
    let bytes = vec![0x5au8; 16];
    let a = BinaryValue::with_byte_order(bytes.clone(), BinarySubtype::Uuid, ByteOrderMode::LittleEndian);
    let b = BinaryValue::with_byte_order(bytes.clone(), BinarySubtype::Uuid, ByteOrderMode::JavaHistorical);
    let c = BinaryValue::with_subtype(bytes, BinarySubtype::Uuid);
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&a), hash_of(&c));
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn same_uuid_under_different_modes_is_not_equal() {
    let le = BinaryValue::from_uuid(sample_uuid(), ByteOrderMode::LittleEndian).unwrap();
    let be = BinaryValue::from_uuid(sample_uuid(), ByteOrderMode::BigEndian).unwrap();
    assert_ne!(le, be);
    assert_ne!(le.cmp(&be), Ordering::Equal);
}

#[test]
fn subtype_participates_in_equality() {
    let generic = BinaryValue::new(vec![1u8, 2, 3]);
    let md5 = BinaryValue::with_subtype(vec![1u8, 2, 3], BinarySubtype::Md5);
    let other = BinaryValue::with_subtype(vec![1u8, 2, 3], BinarySubtype::Other(0x00));
    assert_ne!(generic, md5);
    assert_eq!(generic, other);
    assert_eq!(hash_of(&generic), hash_of(&other));

    let set: HashSet<BinaryValue> = [generic.clone(), md5, other].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn ordering_matrix() {
    let generic = |b: &[u8]| BinaryValue::new(b.to_vec());
    assert_eq!(generic(&[0x01]).cmp(&generic(&[0x01, 0x02])), Ordering::Less);
    assert_eq!(generic(&[0x01, 0x02]).cmp(&generic(&[0x01])), Ordering::Greater);
    assert_eq!(generic(&[0x02]).cmp(&generic(&[0x01, 0xff])), Ordering::Greater);
    assert_eq!(generic(&[]).cmp(&generic(&[0x00])), Ordering::Less);
    assert_eq!(generic(&[0xff, 0x00]).cmp(&generic(&[0xff, 0x00])), Ordering::Equal);

    // Subtype decides before bytes.
    let uuid = BinaryValue::with_subtype(vec![0x00u8], BinarySubtype::Uuid);
    let user = BinaryValue::with_subtype(vec![0x00u8], BinarySubtype::Other(0x80));
    assert_eq!(generic(&[0xff, 0xff]).cmp(&uuid), Ordering::Less);
    assert_eq!(uuid.cmp(&user), Ordering::Less);

    assert_eq!(uuid.compare_to(None), Ordering::Greater);
    assert_eq!(uuid.compare_to(Some(&user)), Ordering::Less);
}

#[test]
fn ordering_is_total_and_consistent_with_equality() {
    let mut rng = rand::thread_rng();
    let subtypes = [BinarySubtype::Generic, BinarySubtype::Uuid, BinarySubtype::Other(0x81)];
    let values: Vec<BinaryValue> = (0..200)
        .map(|_| {
            let len = rng.gen_range(0..4);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen_range(0..3)).collect();
            let subtype = subtypes[rng.gen_range(0..subtypes.len())];
            BinaryValue::with_subtype(bytes, subtype)
        })
        .collect();
    for a in &values {
        for b in &values {
            let ab = a.cmp(b);
            assert_eq!(ab, b.cmp(a).reverse());
            assert_eq!(ab == Ordering::Equal, a == b);
            if a == b {
                assert_eq!(hash_of(a), hash_of(b));
            }
        }
    }
    let mut sorted = values.clone();
    sorted.sort();
    for pair in sorted.windows(2) {
        assert_ne!(pair[0].cmp(&pair[1]), Ordering::Greater);
    }
}
