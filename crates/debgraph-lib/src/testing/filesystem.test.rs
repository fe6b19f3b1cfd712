use super::*;

#[test]
fn test_write_file_creates_parents() {
    let fixture = TempDirFixture::new().unwrap();

    let path = fixture.write_file("graphs/nested/diamond.txt", "a: b\n").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "a: b\n");
}

#[test]
fn test_mirror_holds_gzipped_index() {
    let fixture = TempDirFixture::new().unwrap();

    let root = fixture
        .write_mirror("mirror", "dists/noble/main/binary-amd64/Packages.gz", "Package: a\n")
        .unwrap();

    let bytes = fs::read(root.join("dists/noble/main/binary-amd64/Packages.gz")).unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    assert_eq!(
        crate::networking::gunzip(&bytes, "fixture").unwrap(),
        "Package: a\n"
    );
}
