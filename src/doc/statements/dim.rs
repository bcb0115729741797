/*!
# `DIM <variable>(size) [, <variable>(size) ...]`

## Purpose
Allocate array storage before use.

## Remarks
`DIM A(10)` makes room for the eleven elements `A(0)` through `A(10)`.
An array referenced without a `DIM` is created with eleven elements.
Referencing an element past the end grows the array to fit; arrays
never shrink, and a second `DIM` of the same name only ever grows it.
New elements start at 0, or the empty string for string arrays.

## Example
```text
10 DIM A(5), N$(20)
20 A(10) = 1
30 PRINT A(7); A(10)
RUN
01
```

*/
