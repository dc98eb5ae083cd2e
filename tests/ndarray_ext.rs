//! Integration tests for ndarray support

#![cfg(feature = "ndarray")]

use mixarray::{Array, DataType, Factory, parse, writer};
use ndarray::{ArrayD, IxDyn, array};

#[test]
fn roundtrip_ndarray_2d_matrix() {
    let matrix = array![[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
    let expected = matrix.clone();
    let mixed = Array::from_ndarray(matrix).unwrap();

    let bytes = writer::to_bytes(&mixed).unwrap();
    let parsed = parse(&bytes).unwrap();

    let back: ArrayD<f64> = parsed.to_ndarray().unwrap();
    assert_eq!(expected, back);
}

#[test]
fn roundtrip_ndarray_3d_tensor() {
    let tensor = ArrayD::<i32>::from_shape_fn(IxDyn(&[2, 3, 4]), |idx| {
        (idx[0] * 12 + idx[1] * 4 + idx[2]) as i32
    });
    let expected = tensor.clone();
    let mixed = Array::from_ndarray(tensor).unwrap();
    assert_eq!(mixed.data_type(), DataType::Int);
    assert_eq!(mixed.length(), 24);

    let back: ArrayD<i32> = mixed.to_ndarray().unwrap();
    assert_eq!(expected, back);
}

#[test]
fn factory_array_to_ndarray() {
    let mut mixed = Factory::default().create(DataType::Int, &[3, 3]).unwrap();
    mixed.assign(1);

    let longs: ArrayD<i64> = mixed.to_ndarray().unwrap();
    assert_eq!(longs.shape(), &[3, 3]);
    assert!(longs.iter().all(|&v| v == 1));
}

#[test]
fn half_precision_array() {
    let values = array![half::f16::from_f32(0.5), half::f16::from_f32(1.5)].into_dyn();
    let mixed = Array::from_ndarray(values).unwrap();
    assert_eq!(mixed.data_type(), DataType::Half);

    let back: ArrayD<f32> = mixed.to_ndarray().unwrap();
    assert_eq!(back, array![0.5f32, 1.5].into_dyn());
}
