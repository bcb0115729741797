/*!
# `NEXT [<variable> [, <variable> ...]]`

## Purpose
Close a `FOR` loop.

## Remarks
A bare `NEXT` advances the innermost loop. A named `NEXT` advances
that loop, abandoning any loops nested inside it, which is what makes
jumping out of an inner loop safe. `NEXT X,Y` closes two loops in
order. A `NEXT` with no matching `FOR` is NEXT WITHOUT FOR.

## Example
```text
10 FOR X = 1 TO 2
20 FOR Y = 5 TO 6
30 PRINT X * 10 + Y
40 NEXT Y,X
```

*/
