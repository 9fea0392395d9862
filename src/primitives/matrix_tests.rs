pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_set_get() {
    let mut m = Matrix::zeros(3, 2);
    m.set(2, 1, -4.5);
    assert!((m.get(2, 1) + 4.5).abs() < 1e-12);
    assert_eq!(m.n_rows(), 3);
    assert_eq!(m.n_cols(), 2);
}

#[test]
fn test_row_major_layout() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    assert!((m.get(1, 0) - 3.0).abs() < 1e-12);
}
